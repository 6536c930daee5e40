/// `UrlQuery` and query parameter usage example
use urlkit::{UrlBuilder, UrlQuery};

fn main() {
    // Parse a query string
    let mut query = UrlQuery::parse("name=John&age=30&city=Tokyo");

    // Get values
    println!("name: {:?}", query.get("name")); // Some("John")
    println!("age: {:?}", query.get("age")); // Some("30")
    println!();

    // Set keeps the original position
    query.set("age", "31");
    println!("After set: {query}"); // name=John&age=31&city=Tokyo

    // Setting to None removes the parameter
    query.set("city", None);
    println!("After remove: {query}"); // name=John&age=31
    println!();

    // Segments without `=` or with a second `=` are dropped
    println!("{:?}", UrlQuery::parse("flag&a==b&ok=1").to_string()); // "ok=1"
    println!();

    // Query parameters on a builder
    let mut url = UrlBuilder::parse("https://blob.example.com/container");
    url.set_query_parameter("restype", "container")
        .set_query_parameter("comp", "list");
    println!("{url}"); // https://blob.example.com/container?restype=container&comp=list
    println!("comp = {:?}", url.query_parameter("comp")); // Some("list")
}
