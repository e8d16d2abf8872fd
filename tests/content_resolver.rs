// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Whole-round tests for the ContentResolver backend.

use storio_codegen::{
    ContentResolverBackend, Processor, ProcessorConfig,
    host::{CollectingMessager, ElementModel, MemoryFiler}
};

const TYPE: &str =
    "@com.pushtorefresh.storio3.contentresolver.annotations.StorIOContentResolverType";
const COLUMN: &str =
    "@com.pushtorefresh.storio3.contentresolver.annotations.StorIOContentResolverColumn";

fn tweet(type_arguments: &str) -> ElementModel {
    let mut model = ElementModel::default();
    let pkg = model.package("com.test");
    let tweet = model.class(pkg, "Tweet");
    model
        .annotate(tweet, &format!("{TYPE}({type_arguments})"))
        .unwrap();
    let id = model.field(tweet, "id", "long");
    model
        .annotate(id, &format!("{COLUMN}(name = \"_id\", key = true)"))
        .unwrap();
    let text = model.field(tweet, "text", "java.lang.String");
    model
        .annotate(text, &format!("{COLUMN}(name = \"text\", ignoreNull = true)"))
        .unwrap();
    model
}

fn run(model: &ElementModel, config: ProcessorConfig) -> (MemoryFiler, CollectingMessager) {
    let mut filer = MemoryFiler::new();
    let mut messager = CollectingMessager::new();
    Processor::new(ContentResolverBackend, config).process(model, &mut filer, &mut messager);
    (filer, messager)
}

#[test]
fn generates_resolvers_with_uris() {
    let model = tweet("uri = \"content://tweets\", deleteUri = \"content://tweets/trash\"");
    let (filer, messager) = run(&model, ProcessorConfig::default());
    assert!(!messager.has_errors(), "{:?}", messager.diagnostics());
    assert_eq!(
        filer.names().collect::<Vec<_>>(),
        [
            "com.test.TweetContentResolverTypeMapping",
            "com.test.TweetStorIOContentResolverDeleteResolver",
            "com.test.TweetStorIOContentResolverGetResolver",
            "com.test.TweetStorIOContentResolverPutResolver"
        ]
    );

    let put = filer
        .get("com.test.TweetStorIOContentResolverPutResolver")
        .unwrap();
    assert!(put.contains("return InsertQuery.builder()\n            .uri(\"content://tweets\")"));
    assert!(put.contains("return UpdateQuery.builder()\n            .uri(\"content://tweets\")"));
    assert!(put.contains("import com.pushtorefresh.storio3.contentresolver.queries.InsertQuery;"));

    let delete = filer
        .get("com.test.TweetStorIOContentResolverDeleteResolver")
        .unwrap();
    assert!(delete.contains(
        "return DeleteQuery.builder()\n            .uri(\"content://tweets/trash\")\n            .where(\"_id = ?\")\n            .whereArgs(object.id)\n            .build();"
    ));

    let get = filer
        .get("com.test.TweetStorIOContentResolverGetResolver")
        .unwrap();
    assert!(get.contains(
        "public Tweet mapFromCursor(@NonNull StorIOContentResolver storIOContentResolver, @NonNull Cursor cursor) {"
    ));
}

#[test]
fn missing_uri_for_one_operation() {
    let model = tweet("insertUri = \"content://i\", deleteUri = \"content://d\"");
    let (filer, messager) = run(&model, ProcessorConfig::default());
    assert!(filer.is_empty());
    let error = messager.errors().next().unwrap();
    assert_eq!(
        error.message,
        "Uri of Tweet annotated with StorIOContentResolverType is empty for operation update"
    );
}

#[test]
fn version_is_not_a_content_resolver_key() {
    let mut model = ElementModel::default();
    let pkg = model.package("com.test");
    let tweet = model.class(pkg, "Tweet");
    model
        .annotate(tweet, &format!("{TYPE}(uri = \"content://tweets\")"))
        .unwrap();
    let id = model.field(tweet, "id", "long");
    model
        .annotate(id, &format!("{COLUMN}(name = \"_id\", key = true, version = 2)"))
        .unwrap();
    let (_, messager) = run(&model, ProcessorConfig::default());
    let error = messager.errors().next().unwrap();
    assert!(error.message.starts_with("Can not read StorIOContentResolverColumn on id: "));
    assert_eq!(error.element, Some(id));
}

#[test]
fn non_null_override_is_used() {
    let model = tweet("uri = \"content://tweets\"");
    let (filer, _) = run(
        &model,
        ProcessorConfig::with_non_null("org.jetbrains.annotations.NotNull")
    );
    let put = filer
        .get("com.test.TweetStorIOContentResolverPutResolver")
        .unwrap();
    assert!(put.contains("import org.jetbrains.annotations.NotNull;"));
    assert!(put.contains("    @NotNull\n    protected InsertQuery mapToInsertQuery(@NotNull Tweet object) {"));
}
