use roster::{Draft, UserStore};
use serde_json::json;

fn main() -> Result<(), roster::Error> {
    tracing_subscriber::fmt::init();

    let path = std::env::temp_dir().join("roster_demo_builder.json");
    let _ = std::fs::remove_file(&path);

    // compact single-line JSON instead of the default pretty output
    let store = UserStore::builder(&path).pretty(false).build();

    let ali: Draft = serde_json::from_value(json!({
        "id": 1, "name": "Ali", "age": 30, "email": "a@b.com",
        "phone": "+998901234567", "city": "Tashkent", "jobTitle": "Engineer",
    }))?;
    store.insert(ali)?;

    let contents = std::fs::read_to_string(store.path())?;
    println!("On-disk JSON:\n{contents}");

    println!("\nDebug output: {store:?}");

    let _ = std::fs::remove_file(&path);
    Ok(())
}
