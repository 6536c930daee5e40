use urlkit::UrlBuilder;

fn main() {
    // Parse a URL into its components
    let url = UrlBuilder::parse("https://example.com:8080/path?query=value");

    println!("URL: {url}"); // https://example.com:8080/path?query=value
    println!("Scheme: {:?}", url.scheme()); // Some("https")
    println!("Host: {:?}", url.host()); // Some("example.com")
    println!("Port: {:?}", url.port()); // Some("8080")
    println!("Path: {:?}", url.path()); // Some("/path")
    println!("Query: {:?}", url.query()); // Some("query=value")

    // Re-root the URL by setting an absolute path
    let mut url = url;
    url.set_path("http://www.othersite.com/landing");
    println!("Re-rooted: {url}"); // http://www.othersite.com/landing?query=value

    // Strip the query
    println!("Without query: {}", UrlBuilder::remove_query(&url)); // http://www.othersite.com/landing
}
