// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end tests driving the `nest-scaffold` binary.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output}
};

const ORDER: &str = r#"
#[model(table = "orders")]
pub struct Order {
    #[field(primary, type = "uuid")]
    pub id: String,

    #[field(type = "number")]
    pub total: i64,

    #[enum_values(PENDING = "pending", PAID = "paid")]
    pub status: String,
}
"#;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nest-scaffold"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("NEST_SCAFFOLD_MODEL_PATH")
        .env_remove("NEST_SCAFFOLD_OUT")
        .env_remove("NEST_SCAFFOLD_SWAGGER")
        .env_remove("NEST_SCAFFOLD_TYPEORM")
        .output()
        .unwrap()
}

fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(next) = pending.pop() {
        for entry in fs::read_dir(&next).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                found.push(path);
            }
        }
    }
    found.sort();
    found
}

#[test]
fn missing_model_source_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let models = tmp.path().join("models");
    fs::create_dir(&models).unwrap();
    let out = tmp.path().join("out");

    let output = run(&[
        "generate",
        "enums",
        "DoesNotExist",
        "-m",
        models.to_str().unwrap(),
        "-o",
        out.to_str().unwrap()
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DoesNotExist"), "{stderr}");
    assert!(!out.exists());
}

#[test]
fn unknown_type_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Order.rs"), ORDER).unwrap();

    let output = run(&["generate", "migration", "Order", "-m", tmp.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown generation type `migration`"), "{stderr}");
    assert_eq!(files_under(tmp.path()), [tmp.path().join("Order.rs")]);
}

#[test]
fn generate_all_writes_every_file() {
    let tmp = tempfile::tempdir().unwrap();
    let models = tmp.path().join("models");
    fs::create_dir(&models).unwrap();
    fs::write(models.join("order.rs"), ORDER).unwrap();
    let out = tmp.path().join("src");

    let output = run(&[
        "generate",
        "all",
        "Order",
        "--model-path",
        models.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--use-typeorm",
        "--use-swagger"
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let expected: Vec<PathBuf> = [
        "controllers/Order.controller.ts",
        "dtos/Order.inputDto.ts",
        "dtos/Order.outputDto.ts",
        "dtos/Order.updateDto.ts",
        "entities/Order.entity.ts",
        "enums/Order.enums.ts",
        "services/Order.service.ts"
    ]
    .iter()
    .map(|file| out.join(file))
    .collect();
    assert_eq!(files_under(&out), expected);

    let entity = fs::read_to_string(out.join("entities/Order.entity.ts")).unwrap();
    assert!(entity.contains("@Entity(\"orders\")"));
    assert!(entity.contains("import { OrderStatusEnum } from \"../enums/Order.enums\";"));

    let enums = fs::read_to_string(out.join("enums/Order.enums.ts")).unwrap();
    assert!(enums.contains("export enum OrderStatusEnum {\n  PENDING = \"pending\",\n  PAID = \"paid\"\n}"));
}

#[test]
fn output_defaults_to_model_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("order.rs");
    fs::write(&source, ORDER).unwrap();

    let output = run(&["generate", "dtos", "Order", "-m", source.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    for suffix in ["inputDto", "updateDto", "outputDto"] {
        assert!(tmp.path().join(format!("dtos/Order.{suffix}.ts")).is_file());
    }
}

#[test]
fn invalid_attribute_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("User.rs"),
        r#"
        #[model]
        pub struct User {
            #[field(type = "varchar")]
            pub name: String,
        }
        "#
    )
    .unwrap();

    let output = run(&["generate", "entity", "User", "-m", tmp.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid attributes on model `User`"), "{stderr}");
    assert!(!tmp.path().join("entities").exists());
}
