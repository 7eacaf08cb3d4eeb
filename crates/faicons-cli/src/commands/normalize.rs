use super::{json_pretty, EXIT_SUCCESS};
use faicons_schema::normalize_icon_name;

pub fn run(names: &[String], json: bool) -> Result<u8, String> {
    if json {
        let items: Vec<_> = names
            .iter()
            .map(|n| serde_json::json!({ "input": n, "token": normalize_icon_name(n) }))
            .collect();
        println!("{}", json_pretty(&items)?);
    } else {
        for name in names {
            println!("{}", normalize_icon_name(name));
        }
    }
    Ok(EXIT_SUCCESS)
}
