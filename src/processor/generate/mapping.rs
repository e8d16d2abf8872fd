// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type mapping emitter bundling the three resolvers.

use super::{open_class, unit};
use crate::{
    processor::{backend::RuntimeClasses, parse::TypeMeta},
    utils::java::JavaFile
};

/// Generate the type mapping of `meta`.
pub fn generate<C>(meta: &TypeMeta<C>, runtime: &RuntimeClasses) -> JavaFile {
    let name = runtime.mapping_name(&meta.simple_name);
    let mut file = unit(meta, &name);
    open_class(
        &mut file,
        meta,
        "Generated mapping with collection of resolvers.",
        runtime.type_mapping
    );

    let simple = &meta.simple_name;
    file.code()
        .begin(format!("public {name}()"))
        .line(format!(
            "super(new {}(),",
            runtime.put_resolver_name(simple)
        ))
        .indent()
        .line(format!("new {}(),", runtime.get_resolver_name(simple)))
        .statement(format!("new {}())", runtime.delete_resolver_name(simple)))
        .unindent()
        .end()
        .end();
    file
}
