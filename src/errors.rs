use error_chain::error_chain;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    errors {
        Network(url: String) {
            description("network error")
            display("Error downloading {}", url)
        }
        Format(reason: String) {
            description("format error")
            display("Invalid Contents file: {}", reason)
        }
        InvalidArgument(top_n: i64) {
            description("invalid argument")
            display("The number of packages to display cannot be less than or equal to 0.")
        }
    }
}
