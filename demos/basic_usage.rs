use contract_errors::{
    DEFAULT_NOT_FOUND, ErrorCode, ErrorType, Result, define_error_types,
};

// Compile-time definitions: a typo here fails the build.
define_error_types! {
    DATASET_LOCKED = (Conflict, "Catalog:DatasetLocked"),
    QUOTA_EXCEEDED = (RequestEntityTooLarge, "Storage:QuotaExceeded"),
}

/// Error types declared by a plugin manifest, validated at load time.
fn load_plugin_errors(entries: &[(&str, &str)]) -> Result<Vec<ErrorType>> {
    entries
        .iter()
        .map(|(code, name)| {
            let code: ErrorCode = code.parse().unwrap_or(ErrorCode::CustomServer);
            ErrorType::new(code, name.to_string())
        })
        .collect()
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    println!("1. Built-in and compile-time error types:");
    for et in [&DEFAULT_NOT_FOUND, &DATASET_LOCKED, &QUOTA_EXCEEDED] {
        println!("   {}", et);
    }

    println!("\n2. A well-formed plugin manifest:");
    match load_plugin_errors(&[("CUSTOM_CLIENT", "Billing:CardDeclined"), ("TIMEOUT", "Billing:GatewaySlow")]) {
        Ok(types) => {
            for et in types {
                println!("   {} (namespace={}, cause={})", et, et.namespace(), et.cause());
            }
        }
        Err(err) => println!("   unexpected: {}", err),
    }

    println!("\n3. Manifests that break the contract:");
    let bad_manifests: [&[(&str, &str)]; 3] = [
        &[("CUSTOM_CLIENT", "billing:cardDeclined")],
        &[("INTERNAL", "Default:PluginCrashed")],
        &[("INTERNAL", "Default:NotFound")],
    ];
    for manifest in bad_manifests {
        if let Err(err) = load_plugin_errors(manifest) {
            // What the consumer on the other side matches on:
            println!("   message: {}", err);
            // What operators see:
            err.with_log(|log| println!("   log:     {}", log));
        }
    }
}
