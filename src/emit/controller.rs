// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! NestJS controller emission.
//!
//! The controller is the same for both families: it receives the service by
//! injection and delegates every CRUD operation to it.
//!
//! | Operation | Route | Returns |
//! |-----------|-------|---------|
//! | `findAll` | `GET /<route>` | `Output[]` |
//! | `findOne` | `GET /<route>/:id` | `Output \| null` |
//! | `create` | `POST /<route>` | `Output` |
//! | `update` | `PATCH /<route>/:id` | `Output \| null` |
//! | `remove` | `DELETE /<route>/:id` | `boolean` |

use super::{
    entity::{KeyGeneration, PrimaryKey},
    import_line, string_literal, swagger
};
use crate::{naming, schema::ModelSchema};

/// CRUD operation exposed by controllers and implemented by services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FindAll,
    FindOne,
    Create,
    Update,
    Remove
}

impl Operation {
    /// Every operation in emission order.
    pub const ALL: [Self; 5] = [
        Self::FindAll,
        Self::FindOne,
        Self::Create,
        Self::Update,
        Self::Remove
    ];

    /// Method name on controllers and services.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::FindAll => "findAll",
            Self::FindOne => "findOne",
            Self::Create => "create",
            Self::Update => "update",
            Self::Remove => "remove"
        }
    }

    /// Whether the operation addresses a single record by identifier.
    #[must_use]
    pub const fn takes_id(self) -> bool {
        matches!(self, Self::FindOne | Self::Update | Self::Remove)
    }

    const fn route(self) -> &'static str {
        match self {
            Self::FindAll | Self::Create => "",
            Self::FindOne | Self::Update | Self::Remove => "\":id\""
        }
    }

    const fn http(self) -> &'static str {
        match self {
            Self::FindAll | Self::FindOne => "Get",
            Self::Create => "Post",
            Self::Update => "Patch",
            Self::Remove => "Delete"
        }
    }
}

/// Controller source for `model`.
#[must_use]
pub fn render(model: &ModelSchema, use_swagger: bool) -> String {
    let name = model.name();
    let route = naming::route_path(name);
    let subject = naming::uncapitalize(name);
    let service = naming::service_class(name);
    let input = naming::input_dto(name);
    let update = naming::update_dto(name);
    let output = naming::output_dto(name);

    let key = PrimaryKey::of(model);
    let id_param = match key.generation {
        KeyGeneration::Uuid => "@Param(\"id\") id: string".to_owned(),
        KeyGeneration::Increment => "@Param(\"id\", ParseIntPipe) id: number".to_owned()
    };

    let mut common = vec!["Body", "Controller", "Delete", "Get", "Param"];
    if key.generation == KeyGeneration::Increment {
        common.push("ParseIntPipe");
    }
    common.extend(["Patch", "Post"]);

    let mut imports = vec![import_line(common, "@nestjs/common")];
    if use_swagger {
        imports.push(swagger::controller_import());
    }

    let locals = [
        (service.as_str(), "services", "service"),
        (input.as_str(), "dtos", "inputDto"),
        (update.as_str(), "dtos", "updateDto"),
        (output.as_str(), "dtos", "outputDto")
    ]
    .map(|(symbol, dir, suffix)| import_line([symbol], &naming::import_path(dir, name, suffix)));

    let mut out = imports.join("\n");
    out.push_str("\n\n");
    out.push_str(&locals.join("\n"));
    out.push_str("\n\n");

    if use_swagger {
        out.push_str(&swagger::tags(&route));
        out.push('\n');
    }
    out.push_str(&format!("@Controller({})\n", string_literal(&route)));
    out.push_str(&format!(
        "export class {} {{\n  constructor(private readonly service: {service}) {{}}\n",
        naming::controller_class(name)
    ));

    for operation in Operation::ALL {
        let (params, args, returns) = match operation {
            Operation::FindAll => (String::new(), "", format!("{output}[]")),
            Operation::FindOne => (id_param.clone(), "id", format!("{output} | null")),
            Operation::Create => (format!("@Body() input: {input}"), "input", output.clone()),
            Operation::Update => (
                format!("{id_param}, @Body() input: {update}"),
                "id, input",
                format!("{output} | null")
            ),
            Operation::Remove => (id_param.clone(), "id", "boolean".to_owned())
        };

        out.push('\n');
        if use_swagger {
            for decorator in swagger::operation(operation, &subject, "id") {
                out.push_str(&format!("  {decorator}\n"));
            }
        }
        out.push_str(&format!("  @{}({})\n", operation.http(), operation.route()));
        out.push_str(&format!(
            "  async {}({params}): Promise<{returns}> {{\n    return this.service.{}({args});\n  }}\n",
            operation.method(),
            operation.method()
        ));
    }

    out.push_str("}\n");
    out
}
