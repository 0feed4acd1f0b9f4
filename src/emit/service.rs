// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! NestJS service emission.
//!
//! The plain family keeps records in memory and scans them linearly by
//! primary key. The TypeORM family delegates to an injected repository and
//! maps results through `plainToInstance` so only exposed fields leave the
//! service.

use super::{
    entity::{KeyGeneration, PrimaryKey},
    import_line
};
use crate::{naming, schema::ModelSchema};

struct Symbols {
    entity:  String,
    input:   String,
    update:  String,
    output:  String,
    service: String
}

impl Symbols {
    fn new(model: &ModelSchema) -> Self {
        let name = model.name();
        Self {
            entity:  naming::entity_class(name),
            input:   naming::input_dto(name),
            update:  naming::update_dto(name),
            output:  naming::output_dto(name),
            service: naming::service_class(name)
        }
    }

    fn local_imports(&self, model: &str) -> String {
        [
            (&self.entity, "entities", "entity"),
            (&self.input, "dtos", "inputDto"),
            (&self.update, "dtos", "updateDto"),
            (&self.output, "dtos", "outputDto")
        ]
        .map(|(symbol, dir, suffix)| {
            import_line([symbol.as_str()], &naming::import_path(dir, model, suffix))
        })
        .join("\n")
    }
}

/// In-memory service.
#[must_use]
pub fn plain(model: &ModelSchema) -> String {
    let s = Symbols::new(model);
    let key = PrimaryKey::of(model);
    let pk = &key.name;
    let id = key.ts_type();

    let mut imports = vec![import_line(["Injectable"], "@nestjs/common")];
    let generate_id = match key.generation {
        KeyGeneration::Uuid => {
            imports.push(import_line(["randomUUID"], "crypto"));
            "randomUUID()".to_owned()
        }
        KeyGeneration::Increment => {
            format!("this.data.reduce((max, item) => Math.max(max, item.{pk}), 0) + 1")
        }
    };

    format!(
        "{imports}

{locals}

@Injectable()
export class {service} {{
  private readonly data: {entity}[] = [];

  async findAll(): Promise<{output}[]> {{
    return this.data.map((item) => this.toOutputDto(item));
  }}

  async findOne(id: {id}): Promise<{output} | null> {{
    const entity = this.data.find((item) => item.{pk} === id);
    return entity ? this.toOutputDto(entity) : null;
  }}

  async create(input: {input}): Promise<{output}> {{
    const now = new Date();
    const entity = {{ ...input, {pk}: this.generateId(), createdAt: now, updatedAt: now }} as {entity};
    this.data.push(entity);
    return this.toOutputDto(entity);
  }}

  async update(id: {id}, input: {update}): Promise<{output} | null> {{
    const index = this.data.findIndex((item) => item.{pk} === id);
    if (index === -1) return null;
    this.data[index] = {{ ...this.data[index], ...input, updatedAt: new Date() }};
    return this.toOutputDto(this.data[index]);
  }}

  async remove(id: {id}): Promise<boolean> {{
    const index = this.data.findIndex((item) => item.{pk} === id);
    if (index === -1) return false;
    this.data.splice(index, 1);
    return true;
  }}

  private toOutputDto(entity: {entity}): {output} {{
    return {{ ...entity }};
  }}

  private generateId(): {id} {{
    return {generate_id};
  }}
}}
",
        imports = imports.join("\n"),
        locals = s.local_imports(model.name()),
        service = s.service,
        entity = s.entity,
        input = s.input,
        update = s.update,
        output = s.output
    )
}

/// Repository-backed service.
#[must_use]
pub fn type_orm(model: &ModelSchema) -> String {
    let s = Symbols::new(model);
    let key = PrimaryKey::of(model);
    let id = key.ts_type();
    let criteria = if key.name == "id" {
        "{ id }".to_owned()
    } else {
        format!("{{ {}: id }}", key.name)
    };

    let imports = [
        import_line(["Injectable"], "@nestjs/common"),
        import_line(["InjectRepository"], "@nestjs/typeorm"),
        import_line(["plainToInstance"], "class-transformer"),
        import_line(["Repository"], "typeorm")
    ]
    .join("\n");

    format!(
        "{imports}

{locals}

@Injectable()
export class {service} {{
  constructor(
    @InjectRepository({entity})
    private readonly repo: Repository<{entity}>
  ) {{}}

  async findAll(): Promise<{output}[]> {{
    const items = await this.repo.find();
    return items.map((item) => this.toOutputDto(item));
  }}

  async findOne(id: {id}): Promise<{output} | null> {{
    const entity = await this.repo.findOneBy({criteria});
    return entity ? this.toOutputDto(entity) : null;
  }}

  async create(input: {input}): Promise<{output}> {{
    const entity = this.repo.create(input);
    const saved = await this.repo.save(entity);
    return this.toOutputDto(saved);
  }}

  async update(id: {id}, input: {update}): Promise<{output} | null> {{
    await this.repo.update(id, input);
    const updated = await this.repo.findOneBy({criteria});
    return updated ? this.toOutputDto(updated) : null;
  }}

  async remove(id: {id}): Promise<boolean> {{
    const result = await this.repo.delete(id);
    return result.affected !== 0;
  }}

  private toOutputDto(entity: {entity}): {output} {{
    return plainToInstance({output}, entity, {{ excludeExtraneousValues: true }});
  }}
}}
",
        locals = s.local_imports(model.name()),
        service = s.service,
        entity = s.entity,
        input = s.input,
        update = s.update,
        output = s.output
    )
}
