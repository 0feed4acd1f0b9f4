// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Load a model source from disk and write scaffolds through the library.

use std::fs;

use nest_scaffold::{Dispatcher, EngineOptions, ScaffoldError, ScaffoldKind, load};

const MODELS: &str = r#"
use crate::models::Team;

#[model]
pub struct User {
    #[field(primary, type = "uuid")]
    pub id: String,

    #[field(type = "string")]
    pub name: String,

    #[field(type = "string")]
    pub email: String,

    #[many_to_one(Team)]
    pub team: Team,
}

#[model]
pub struct Order {
    #[field(primary, type = "uuid")]
    pub id: String,

    #[enum_values(PENDING = "pending", PAID = "paid")]
    pub status: String,
}
"#;

#[test]
fn user_entity_with_typeorm() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("models.rs");
    fs::write(&source, MODELS).unwrap();

    let loaded = load(&source, "User").unwrap();
    let mut dispatcher: Dispatcher = Dispatcher::default();
    dispatcher.init(EngineOptions::new(tmp.path()).with_type_orm(true));

    let written = dispatcher.write(ScaffoldKind::Entity, loaded.schema()).unwrap();
    assert_eq!(written, [tmp.path().join("entities/User.entity.ts")]);

    let entity = fs::read_to_string(&written[0]).unwrap();
    assert!(entity.contains("@PrimaryGeneratedColumn(\"uuid\")\n  id: string;"));
    assert_eq!(entity.matches("@Column({ type: \"varchar\" })").count(), 2);
    assert!(entity.contains("@CreateDateColumn()"));
    assert!(entity.contains("@UpdateDateColumn()"));
    assert!(!entity.contains("Enum"));
}

#[test]
fn order_enum_reaches_every_dto() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("models.rs");
    fs::write(&source, MODELS).unwrap();

    let loaded = load(&source, "Order").unwrap();
    let mut dispatcher: Dispatcher = Dispatcher::default();
    dispatcher.init(EngineOptions::new(tmp.path()));

    let written = dispatcher.write_all(loaded.schema()).unwrap();
    assert_eq!(written.len(), 7);

    let import = "import { OrderStatusEnum } from \"../enums/Order.enums\";";
    for file in ["inputDto", "updateDto", "outputDto"] {
        let dto = fs::read_to_string(tmp.path().join(format!("dtos/Order.{file}.ts"))).unwrap();
        assert!(dto.contains(import), "{file}");
    }

    let input = fs::read_to_string(tmp.path().join("dtos/Order.inputDto.ts")).unwrap();
    assert!(input.contains("@IsEnum(OrderStatusEnum)\n  status: OrderStatusEnum;"));
    assert_eq!(input.matches("@IsString()").count(), 1);
    assert!(!input.contains("@IsString()\n  status"));
}

#[test]
fn relations_resolve_within_the_source() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("models.rs");
    fs::write(&source, MODELS).unwrap();

    let loaded = load(&source, "User").unwrap();
    let (field, relation) = loaded.schema().relations().next().unwrap();

    assert_eq!(field, "team");
    assert_eq!(relation.target, "Team");
    assert!(loaded.store().resolve_relation(relation).is_none());
    assert!(loaded.schema().field("team").is_none());
}

#[test]
fn dispatcher_requires_init() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("models.rs");
    fs::write(&source, MODELS).unwrap();
    let loaded = load(&source, "Order").unwrap();

    let dispatcher: Dispatcher = Dispatcher::default();
    let err = dispatcher.write_dtos(loaded.schema()).unwrap_err();

    assert!(matches!(err, ScaffoldError::Configuration));
    assert!(!tmp.path().join("dtos").exists());
}
