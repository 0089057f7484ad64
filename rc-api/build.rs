use std::{env, fs, path::Path};

fn main() {
    let spec_path = Path::new("spec/resource-controller.json");
    println!("cargo:rerun-if-changed={}", spec_path.display());

    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    let raw = fs::read_to_string(spec_path).unwrap();
    let spec: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Progenitor asserts at most one error body type per operation, and
    // `default` responses land in both the success and error buckets.
    if let Some(paths) = spec.get("paths").and_then(|p| p.as_object()) {
        for (path, methods) in paths {
            let Some(methods) = methods.as_object() else {
                continue;
            };
            for (method, op) in methods {
                let Some(responses) = op.get("responses").and_then(|r| r.as_object()) else {
                    continue;
                };
                assert!(
                    !responses.contains_key("default"),
                    "{method} {path}: `default` responses are not supported"
                );
                for (code, response) in responses {
                    if code.starts_with('2') {
                        continue;
                    }
                    let schema = response
                        .pointer("/content/application~1json/schema/$ref")
                        .and_then(|s| s.as_str());
                    assert_eq!(
                        schema,
                        Some("#/components/schemas/ErrorResponse"),
                        "{method} {path} {code}: error responses must use ErrorResponse"
                    );
                }
            }
        }
    }

    // Generate Rust client code via progenitor
    let mut settings = progenitor::GenerationSettings::default();
    settings.with_interface(progenitor::InterfaceStyle::Builder);

    let mut generator = progenitor::Generator::new(&settings);
    let spec: openapiv3::OpenAPI = serde_json::from_value(spec).unwrap();
    let tokens = generator.generate_tokens(&spec).unwrap();
    let ast = syn::parse2(tokens).unwrap();
    let content = prettyplease::unparse(&ast);

    fs::write(out_dir.join("codegen.rs"), content).unwrap();
}
