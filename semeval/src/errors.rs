// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    links {
        Graph(::semgraph::errors::Error, ::semgraph::errors::ErrorKind);
    }

    foreign_links {
        Json(::serde_json::Error);
    }

    errors {
        Conversion(reason: String) {
            description("cannot convert input into semantic graphs")
            display("cannot convert input into semantic graphs: {}", reason)
        }
    }
}
