// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Json(::serde_json::Error);
        Regex(::regex::Error);
    }

    errors {
        InvalidGraph(graph_id: String, reason: String) {
            description("invalid semantic graph")
            display("invalid semantic graph `{}`: {}", graph_id, reason)
        }
    }
}
