use super::{json_pretty, EXIT_SUCCESS};
use faicons_schema::{
    IconAnimation, IconFlip, IconPull, IconRotation, IconSize, IconStyle, StackLayerSize,
    StylePrefix,
};

fn names<T: Copy>(all: &[T], name: fn(T) -> &'static str) -> Vec<&'static str> {
    all.iter().skip(1).map(|v| name(*v)).collect()
}

pub fn run(json: bool) -> Result<u8, String> {
    let prefixes: Vec<(&str, &str)> = StylePrefix::ALL
        .iter()
        .map(|p| (p.as_str(), IconStyle::from(*p).name()))
        .collect();
    let options = [
        ("style", names(IconStyle::ALL, IconStyle::name)),
        ("size", names(IconSize::ALL, IconSize::name)),
        ("animation", names(IconAnimation::ALL, IconAnimation::name)),
        ("rotation", names(IconRotation::ALL, IconRotation::name)),
        ("flip", names(IconFlip::ALL, IconFlip::name)),
        ("pull", names(IconPull::ALL, IconPull::name)),
        ("stack", names(StackLayerSize::ALL, StackLayerSize::name)),
    ];

    if json {
        let payload = serde_json::json!({
            "prefixes": prefixes
                .iter()
                .map(|(p, s)| serde_json::json!({ "prefix": p, "style": s }))
                .collect::<Vec<_>>(),
            "options": options
                .iter()
                .map(|(k, v)| ((*k).to_owned(), serde_json::json!(v)))
                .collect::<serde_json::Map<_, _>>(),
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("{:<8} STYLE", "PREFIX");
        for (prefix, style) in &prefixes {
            println!("{prefix:<8} {style}");
        }
        println!();
        for (option, values) in &options {
            println!("--{option:<10} {}", values.join(", "));
        }
    }
    Ok(EXIT_SUCCESS)
}
