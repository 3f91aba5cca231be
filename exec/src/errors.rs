// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    links {
        Eval(::semeval::errors::Error, ::semeval::errors::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        Yaml(::serde_yaml::Error);
        Csv(::csv::Error);
    }
}
