// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Round orchestration.
//!
//! A [`Processor`] runs one backend over the elements of a compilation round:
//!
//! ```text
//! classes  ──► validate_class ──► type_config ──► TypeMeta
//! columns  ──► validate_column ──► column_payload ──► ColumnMeta ──► TypeMeta
//! creators ──► validate_creator ──► CreatorMeta ──► TypeMeta
//!                     │
//!                     ▼
//!            validate_all ──► generate_all ──► Filer
//! ```
//!
//! The first fatal error is reported through the [`Messager`] and ends the
//! round without writing anything further. Columns of a class whose parent is
//! annotated but which is not annotated itself are reported as warnings and
//! skipped.
//!
//! # Module Structure
//!
//! ```text
//! processor/
//! ├── backend.rs     - Backend trait, SQLite and ContentResolver backends
//! ├── parse.rs       - annotation payloads, ColumnMeta, CreatorMeta, TypeMeta
//! ├── introspect.rs  - per-element checks, accessor cache
//! ├── validate.rs    - cross-class checks
//! ├── query.rs       - WHERE clauses and storage targets
//! └── generate.rs    - put / get / delete / mapping / table emitters
//! ```

mod backend;
pub mod generate;
mod introspect;
pub mod parse;
pub mod query;
mod validate;

pub use backend::{
    Backend, ContentResolverBackend, ContentResolverTypeConfig, RuntimeClasses, SqliteBackend,
    SqliteTypeConfig, TypeConfig
};
pub use introspect::{NON_NULL_ANNOTATIONS, ProcessingContext};
pub use validate::{validate_all, validate_type};

use self::{
    introspect::{column_meta, creator_meta, validate_class, validate_column, validate_creator},
    parse::{AnnotationSet, ColumnMeta, TypeMeta}
};
use crate::{
    config::ProcessorConfig,
    error::ProcessingError,
    host::{ElementHost, ElementId, Filer, Messager, Modifier},
    utils::java::ClassName
};

/// Result of one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Qualified names of the written units, in emission order.
    pub generated: Vec<String>,
    /// Errors reported.
    pub errors:    usize,
    /// Warnings reported.
    pub warnings:  usize
}

impl RoundOutcome {
    /// Whether the round finished without errors.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// Annotation processor for one backend.
///
/// The [`ProcessingContext`] survives across rounds, so accessors resolved
/// once are not looked up again.
#[derive(Debug)]
pub struct Processor<B: Backend> {
    backend: B,
    config:  ProcessorConfig,
    context: ProcessingContext
}

impl<B: Backend> Processor<B> {
    /// Create a processor running `backend` with `config`.
    #[must_use]
    pub fn new(backend: B, config: ProcessorConfig) -> Self {
        Self {
            backend,
            config,
            context: ProcessingContext::new()
        }
    }

    /// Backend of this processor.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Accessor cache accumulated so far.
    #[must_use]
    pub fn context(&self) -> &ProcessingContext {
        &self.context
    }

    /// Run one round over `host`, writing units to `filer` and diagnostics to
    /// `messager`.
    pub fn process<H: ElementHost + ?Sized>(
        &mut self,
        host: &H,
        filer: &mut dyn Filer,
        messager: &mut dyn Messager
    ) -> RoundOutcome {
        let span = tracing::info_span!("round", backend = self.backend.name());
        let _entered = span.enter();

        let mut outcome = RoundOutcome::default();
        if let Err(error) = self.run(host, filer, messager, &mut outcome) {
            report(messager, &mut outcome, &error);
        }
        tracing::info!(
            generated = outcome.generated.len(),
            errors = outcome.errors,
            warnings = outcome.warnings,
            "round finished"
        );
        outcome
    }

    fn run<H: ElementHost + ?Sized>(
        &mut self,
        host: &H,
        filer: &mut dyn Filer,
        messager: &mut dyn Messager,
        outcome: &mut RoundOutcome
    ) -> Result<(), ProcessingError> {
        let annotations = self.backend.annotations();
        let metas = self.collect(host, messager, outcome, &annotations)?;
        validate_all(&metas, &annotations)?;

        for meta in &metas {
            for file in self.backend.generate_all(meta) {
                filer.write(&file)?;
                let name = file.qualified_name();
                tracing::info!(file = %name, "generated");
                outcome.generated.push(name);
            }
        }
        Ok(())
    }

    fn collect<H: ElementHost + ?Sized>(
        &mut self,
        host: &H,
        messager: &mut dyn Messager,
        outcome: &mut RoundOutcome,
        annotations: &AnnotationSet
    ) -> Result<Vec<TypeMeta<B::Config>>, ProcessingError> {
        let non_null = self.config.non_null_class(host);
        let mut metas = Vec::new();

        for class in host.annotated_with(annotations.type_annotation) {
            metas.push(self.type_meta(host, class, annotations, &non_null)?);
        }

        for column in host.annotated_with(annotations.column) {
            match validate_column(&mut self.context, host, column, annotations) {
                Ok(()) => {}
                Err(error) if error.is_recoverable() => {
                    report(messager, outcome, &error);
                    continue;
                }
                Err(error) => return Err(error)
            }
            let payload = self.backend.column_payload(host, column)?;
            let meta = column_meta(&self.context, host, column, payload, annotations)?;
            let owner = owner(&mut metas, host, meta.enclosing, column)?;
            add_column(owner, meta, annotations)?;
        }

        for creator in host.annotated_with(annotations.creator) {
            validate_creator(host, creator, annotations)?;
            let meta = creator_meta(host, creator);
            let owner = owner(&mut metas, host, meta.enclosing, creator)?;
            if owner.creator.is_some() {
                return Err(ProcessingError::semantic(
                    creator,
                    format!(
                        "Only one creator method or constructor is allowed: {}",
                        owner.simple_name
                    )
                ));
            }
            tracing::debug!(class = %owner.simple_name, parameters = meta.parameters.len(), "discovered creator");
            owner.creator = Some(meta);
        }

        Ok(metas)
    }

    fn type_meta<H: ElementHost + ?Sized>(
        &self,
        host: &H,
        class: ElementId,
        annotations: &AnnotationSet,
        non_null: &ClassName
    ) -> Result<TypeMeta<B::Config>, ProcessingError> {
        validate_class(host, class, annotations)?;
        let config = self.backend.type_config(host, class)?;
        let mut meta = TypeMeta::new(
            host.simple_name(class),
            host.package_of(class),
            class,
            config,
            non_null.clone()
        );
        meta.needs_creator = host.modifiers(class).contains(&Modifier::Abstract);
        tracing::debug!(class = %meta.simple_name, package = %meta.package, "discovered class");
        Ok(meta)
    }
}

fn report(messager: &mut dyn Messager, outcome: &mut RoundOutcome, error: &ProcessingError) {
    if error.is_recoverable() {
        outcome.warnings += 1;
    } else {
        outcome.errors += 1;
    }
    messager.print(error.severity(), &error.to_string(), error.element());
}

fn owner<'a, C, H: ElementHost + ?Sized>(
    metas: &'a mut [TypeMeta<C>],
    host: &H,
    class: ElementId,
    member: ElementId
) -> Result<&'a mut TypeMeta<C>, ProcessingError> {
    metas
        .iter_mut()
        .find(|meta| meta.element == class)
        .ok_or_else(|| {
            ProcessingError::semantic(
                member,
                format!("Please annotate class {} first", host.simple_name(class))
            )
        })
}

fn add_column<C>(
    meta: &mut TypeMeta<C>,
    column: ColumnMeta,
    annotations: &AnnotationSet
) -> Result<(), ProcessingError> {
    let duplicate = |column: &ColumnMeta| {
        ProcessingError::semantic(
            column.element,
            format!("Column name already used in this class: {}", column.name())
        )
    };
    if meta.column(column.name()).is_some() {
        return Err(duplicate(&column));
    }

    let needs_creator = column.needs_creator();
    let mixed = (meta.needs_creator && !needs_creator)
        || (!meta.needs_creator && needs_creator && !meta.columns().is_empty());
    if mixed {
        return Err(ProcessingError::semantic(
            column.element,
            format!(
                "Can't apply {} annotation to both fields and methods in a same class: {}",
                annotations.column_name(),
                meta.simple_name
            )
        ));
    }
    meta.needs_creator |= needs_creator;
    meta.insert_column(column).map_err(|rejected| duplicate(&rejected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Severity,
        host::{CollectingMessager, ElementModel, MemoryFiler}
    };

    const TYPE: &str = "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteType";
    const COLUMN: &str = "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteColumn";
    const CREATOR: &str = "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteCreator";

    fn user() -> (ElementModel, ElementId) {
        let mut model = ElementModel::default();
        let pkg = model.package("com.test");
        let class = model.class(pkg, "User");
        model.annotate(class, &format!("{TYPE}(table = \"users\")")).unwrap();
        (model, class)
    }

    fn run(model: &ElementModel) -> (RoundOutcome, MemoryFiler, CollectingMessager) {
        let mut processor = Processor::new(SqliteBackend, ProcessorConfig::default());
        let mut filer = MemoryFiler::new();
        let mut messager = CollectingMessager::new();
        let outcome = processor.process(model, &mut filer, &mut messager);
        (outcome, filer, messager)
    }

    fn single_error(model: &ElementModel) -> String {
        let (outcome, filer, messager) = run(model);
        assert_eq!(outcome.errors, 1);
        assert!(filer.is_empty());
        let errors: Vec<_> = messager.errors().collect();
        assert_eq!(errors.len(), 1);
        errors[0].message.clone()
    }

    #[test]
    fn generates_four_units_per_class() {
        let (mut model, class) = user();
        let id = model.field(class, "id", "long");
        model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();

        let (outcome, filer, messager) = run(&model);
        assert!(outcome.is_success());
        assert!(messager.diagnostics().is_empty());
        assert_eq!(
            outcome.generated,
            [
                "com.test.UserStorIOSQLitePutResolver",
                "com.test.UserStorIOSQLiteGetResolver",
                "com.test.UserStorIOSQLiteDeleteResolver",
                "com.test.UserSQLiteTypeMapping"
            ]
        );
        assert_eq!(filer.len(), 4);
    }

    #[test]
    fn duplicate_column_name() {
        let (mut model, class) = user();
        for field in ["id", "otherId"] {
            let id = model.field(class, field, "long");
            model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();
        }
        assert_eq!(single_error(&model), "Column name already used in this class: _id");
    }

    #[test]
    fn mixed_fields_and_methods() {
        let (mut model, class) = user();
        let id = model.field(class, "id", "long");
        model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();
        let name = model.method(class, "getName", "java.lang.String");
        model.annotate(name, &format!("{COLUMN}(name = \"name\")")).unwrap();
        assert_eq!(
            single_error(&model),
            "Can't apply StorIOSQLiteColumn annotation to both fields and methods in a same class: User"
        );
    }

    #[test]
    fn abstract_class_rejects_plain_fields() {
        let (mut model, class) = user();
        ElementModel::modifiers(&mut model, class, &[Modifier::Public, Modifier::Abstract]);
        let id = model.field(class, "id", "long");
        model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();
        assert_eq!(
            single_error(&model),
            "Can't apply StorIOSQLiteColumn annotation to both fields and methods in a same class: User"
        );
    }

    #[test]
    fn second_creator_is_rejected() {
        let (mut model, class) = user();
        let id = model.method(class, "getId", "long");
        model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();
        for _ in 0..2 {
            let ctor = model.constructor(class, &[("id", "long")]);
            model.annotate(ctor, CREATOR).unwrap();
        }
        assert_eq!(
            single_error(&model),
            "Only one creator method or constructor is allowed: User"
        );
    }

    #[test]
    fn creator_drives_generation() {
        let (mut model, class) = user();
        let id = model.method(class, "getId", "long");
        model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();
        let ctor = model.constructor(class, &[("id", "long")]);
        model.annotate(ctor, CREATOR).unwrap();

        let (outcome, filer, _) = run(&model);
        assert!(outcome.is_success());
        let get = filer.get("com.test.UserStorIOSQLiteGetResolver").unwrap();
        assert!(get.contains("User object = new User(id);"));
    }

    #[test]
    fn fatal_error_is_anchored_to_element() {
        let (mut model, class) = user();
        let date = model.field(class, "createdAt", "java.util.Date");
        model.annotate(date, &format!("{COLUMN}(name = \"created_at\")")).unwrap();
        let (_, _, messager) = run(&model);
        let error = &messager.diagnostics()[0];
        assert_eq!(error.severity, Severity::Error);
        assert_eq!(error.element, Some(date));
        assert!(error.message.ends_with("please write your own resolver: java.util.Date"));
    }

    #[test]
    fn io_failure_is_reported_with_prefix() {
        let (mut model, class) = user();
        let id = model.field(class, "id", "long");
        model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();

        let mut processor = Processor::new(SqliteBackend, ProcessorConfig::default());
        let mut filer = MemoryFiler::new();
        let mut messager = CollectingMessager::new();
        assert!(processor.process(&model, &mut filer, &mut messager).is_success());

        let second = processor.process(&model, &mut filer, &mut messager);
        assert_eq!(second.errors, 1);
        assert!(second.generated.is_empty());
        let error = messager.errors().next().unwrap();
        assert_eq!(
            error.message,
            "Problem occurred with StorIOProcessor: Attempt to recreate a file for type com.test.UserStorIOSQLitePutResolver"
        );
        assert_eq!(error.element, None);
    }

    fn model_with_private_field(class_name: &str, field: &str, accessors: bool) -> ElementModel {
        let mut model = ElementModel::default();
        let pkg = model.package("com.test");
        let class = model.class(pkg, class_name);
        model.annotate(class, &format!("{TYPE}(table = \"t\")")).unwrap();
        let id = model.field(class, "id", "long");
        model.annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)")).unwrap();
        let private = model.field(class, field, "java.lang.String");
        ElementModel::modifiers(&mut model, private, &[Modifier::Private]);
        model.annotate(private, &format!("{COLUMN}(name = \"{field}\")")).unwrap();
        if accessors {
            model.method(class, "getName", "java.lang.String");
            let setter = model.method(class, "setName", "void");
            model.parameters(setter, &[("name", "java.lang.String")]);
        }
        model
    }

    #[test]
    fn reused_processor_resolves_accessors_per_host() {
        let first = model_with_private_field("User", "name", true);
        let second = model_with_private_field("Other", "title", false);

        let mut processor = Processor::new(SqliteBackend, ProcessorConfig::default());
        let mut filer = MemoryFiler::new();
        let mut messager = CollectingMessager::new();
        assert!(processor.process(&first, &mut filer, &mut messager).is_success());

        let mut filer = MemoryFiler::new();
        let mut messager = CollectingMessager::new();
        let outcome = processor.process(&second, &mut filer, &mut messager);
        assert_eq!(outcome.errors, 1);
        assert!(filer.is_empty());
        assert_eq!(
            messager.errors().next().unwrap().message,
            "StorIOSQLiteColumn can not be applied to private field without corresponding getter: title"
        );
    }

    #[test]
    fn accessors_stay_cached_for_the_same_class() {
        let model = model_with_private_field("User", "name", true);
        let mut processor = Processor::new(SqliteBackend, ProcessorConfig::default());
        for _ in 0..2 {
            let mut filer = MemoryFiler::new();
            let mut messager = CollectingMessager::new();
            assert!(processor.process(&model, &mut filer, &mut messager).is_success());
            let put = filer.get("com.test.UserStorIOSQLitePutResolver").unwrap();
            assert!(put.contains("contentValues.put(\"name\", object.getName());"));
        }
    }
}
