//! End-to-end tests for packaging specs into files on disk.

use std::fs;

use poet_codegen::{
    builder::CodeWriter,
    file::{FileHeader, SourceFile},
    spec::{FieldSpec, SpecBuilder, TypeName, TypeSpec},
};
use poet_core::{FileRules, FixedClock, FormatConfig, GeneratedFile, Indent, Overwrite, WriteResult};
use tempfile::TempDir;

fn feed_file() -> SourceFile {
    let feed = TypeSpec::class_builder("feed")
        .super_type(TypeName::new("UIViewController").with_import("UIKit"))
        .field(
            FieldSpec::builder("updated_at")
                .type_name(TypeName::date().optional())
                .mutable()
                .build(),
        )
        .build();
    let state = TypeSpec::enum_builder("feed_state")
        .field(FieldSpec::builder("idle").build())
        .field(FieldSpec::builder("loading").build())
        .build();

    SourceFile::new(
        FileHeader::new("Feed")
            .framework("feed_kit")
            .generator_info("Generated from feed.json"),
    )
    .writer(CodeWriter::new().with_clock(FixedClock::ymd(2015, 11, 10)))
    .spec(feed)
    .spec(state)
}

const FEED_SWIFT: &str = "\
//
//  Feed.swift
//  FeedKit
//
//  Generated from feed.json
//
//  Contains:
//  class Feed
//  enum FeedState
//
//  Generated by Poet on 11/10/15
//

import Foundation
import UIKit

class Feed: UIViewController {
    var updatedAt: Date?
}

enum FeedState {
    case idle
    case loading
}
";

#[test]
fn test_render_file() {
    assert_eq!(feed_file().render(), FEED_SWIFT);
}

#[test]
fn test_imports_union_across_specs() {
    let imports: Vec<_> = feed_file().collect_imports().into_iter().collect();
    assert_eq!(imports, vec!["Foundation", "UIKit"]);
}

#[test]
fn test_write_file() {
    let temp = TempDir::new().unwrap();
    let file = feed_file();

    let result = file.write(temp.path()).unwrap();
    assert_eq!(result, WriteResult::Written);

    let written = fs::read_to_string(temp.path().join("Feed.swift")).unwrap();
    assert_eq!(written, FEED_SWIFT);
}

#[test]
fn test_if_missing_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Feed.swift");
    fs::write(&path, "// edited by hand\n").unwrap();

    let file = feed_file().rules(FileRules {
        overwrite: Overwrite::IfMissing,
    });
    let result = file.write(temp.path()).unwrap();

    assert_eq!(result, WriteResult::Skipped);
    assert_eq!(fs::read_to_string(&path).unwrap(), "// edited by hand\n");
}

#[test]
fn test_config_from_toml_drives_rendering() {
    let config: FormatConfig = r#"
        indent = 2
        generator-name = "ModelGen"
        date-format = "%Y-%m-%d"
        file-extension = "gen.swift"
    "#
    .parse()
    .unwrap();
    assert_eq!(config.indent, Indent::COMPACT);

    let file = SourceFile::new(FileHeader::new("Flag"))
        .writer(CodeWriter::with_config(config).with_clock(FixedClock::ymd(2024, 1, 31)))
        .spec(
            TypeSpec::struct_builder("flag")
                .without_default_init()
                .field(FieldSpec::builder("on").type_name(TypeName::boolean()).build())
                .build(),
        );

    assert_eq!(
        file.render(),
        "//\n\
         //  Flag.gen.swift\n\
         //\n\
         //  Contains:\n\
         //  struct Flag\n\
         //\n\
         //  Generated by ModelGen on 2024-01-31\n\
         //\n\
         \n\
         struct Flag {\n\
         \x20 let on: Bool\n\
         }\n"
    );

    let temp = TempDir::new().unwrap();
    file.write(temp.path()).unwrap();
    assert!(temp.path().join("Flag.gen.swift").exists());
}

#[test]
fn test_framework_line_from_spec() {
    let file = SourceFile::new(FileHeader::new("Feed").without_generation_date()).spec(
        TypeSpec::class_builder("feed")
            .framework("feed_kit")
            .build(),
    );

    assert_eq!(
        file.render(),
        "//\n\
         //  Feed.swift\n\
         //  FeedKit\n\
         //\n\
         //  Contains:\n\
         //  class Feed\n\
         //\n\
         //  Generated by Poet\n\
         //\n\
         \n\
         class Feed {\n\
         \n\
         }\n"
    );
}
