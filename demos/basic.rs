use roster::{Draft, UserStore};
use serde_json::json;

fn main() -> Result<(), roster::Error> {
    tracing_subscriber::fmt::init();

    let path = std::env::temp_dir().join("roster_demo_basic.json");
    let _ = std::fs::remove_file(&path);
    let store = UserStore::open(&path);

    // insert / get / remove
    let ali: Draft = serde_json::from_value(json!({
        "id": 1, "name": "Ali", "age": 30, "email": "a@b.com",
        "phone": "+998901234567", "city": "Tashkent", "jobTitle": "Engineer",
    }))?;
    let created = store.insert(ali)?;
    println!("created = {created:?}");
    println!("get(1)  = {:?}", store.get(1));

    // single-field update with coercion: "31" becomes the integer 31
    let updated = store.update_field(1, "age", &json!("31"))?;
    println!("age after update = {}", updated.age);

    // a duplicate id is rejected, the original record stays
    let rival: Draft = serde_json::from_value(json!({
        "id": 1, "name": "Vali", "age": 40, "email": "v@b.com",
        "phone": "+998900000000", "city": "Bukhara", "jobTitle": "Manager",
    }))?;
    println!("duplicate insert = {:?}", store.insert(rival));

    // snapshots
    println!("all    = {:?}", store.all());
    println!("len    = {}", store.len());
    println!("empty? = {}", store.is_empty());

    // delete and confirm
    println!("remove(1) = {}", store.remove(1));
    println!("get(1)    = {:?}", store.get(1));

    let _ = std::fs::remove_file(&path);
    Ok(())
}
