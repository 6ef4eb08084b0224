//! Snapshot tests for whole-declaration rendering.
//!
//! These tests verify that rendered declarations match the expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use poet_codegen::{
    builder::{CodeBlock, Comparator, ComparisonList, Emitter, control_flow},
    spec::{FieldSpec, MethodSpec, Modifier, ParameterSpec, SpecBuilder, TypeName, TypeSpec},
};

fn test_enum() -> poet_codegen::spec::TypeSpecBuilder {
    TypeSpec::enum_builder("test")
        .description("This is a test enum")
        .modifiers([Modifier::Private, Modifier::Mutating])
}

#[test]
fn test_enum_no_inheritance() {
    assert_eq!(
        test_enum().build().render(),
        "/**\n    This is a test enum\n*/\nprivate enum Test {\n\n}"
    );
}

#[test]
fn test_enum_with_super_type_and_protocols() {
    let spec = test_enum()
        .super_type(TypeName::string())
        .protocols([TypeName::new("TestProtocol"), TypeName::new("OtherProtocol")])
        .build();
    assert_eq!(
        spec.render(),
        "/**\n    This is a test enum\n*/\nprivate enum Test: String, TestProtocol, OtherProtocol {\n\n}"
    );
}

#[test]
fn test_enum_single_case() {
    let spec = test_enum()
        .protocols([TypeName::new("TestProtocol"), TypeName::new("OtherProtocol")])
        .field(
            FieldSpec::builder("test_case_one")
                .description("This is the first test case")
                .initializer("\"test_case_one\"")
                .build(),
        )
        .build();
    assert_eq!(
        spec.render(),
        "/**\n\
         \x20   This is a test enum\n\
         */\n\
         private enum Test: TestProtocol, OtherProtocol {\n\
         \x20   // This is the first test case\n\
         \x20   case testCaseOne = \"test_case_one\"\n\
         }"
    );
}

#[test]
fn test_enum_many_cases() {
    let spec = (1..=10)
        .fold(
            test_enum().protocols([TypeName::new("TestProtocol"), TypeName::new("OtherProtocol")]),
            |builder, i| {
                let case = FieldSpec::builder(format!("test_case_{i}"))
                    .description(format!("This is the {i}th case"));
                let case = if i % 2 == 0 {
                    case.initializer(format!("\"test_case_{i}\""))
                } else {
                    case
                };
                builder.field(case.build())
            },
        )
        .build();

    insta::assert_snapshot!("enum_many_cases", spec.render());
}

#[test]
fn test_struct_default_init() {
    let spec = TypeSpec::struct_builder("point")
        .modifier(Modifier::Public)
        .protocol(TypeName::new("Equatable"))
        .field(
            FieldSpec::builder("a")
                .type_name(TypeName::integer())
                .modifier(Modifier::Public)
                .build(),
        )
        .field(
            FieldSpec::builder("b")
                .type_name(TypeName::string())
                .modifier(Modifier::Public)
                .description("Label shown to users")
                .build(),
        )
        .build();

    insta::assert_snapshot!("struct_default_init", spec.render());
}

#[test]
fn test_protocol_requirements() {
    let spec = TypeSpec::protocol_builder("data_source")
        .modifier(Modifier::Public)
        .description("Supplies rows.")
        .field(FieldSpec::builder("count").type_name(TypeName::integer()).build())
        .field(
            FieldSpec::builder("title")
                .type_name(TypeName::string().optional())
                .mutable()
                .build(),
        )
        .method(
            MethodSpec::builder("row")
                .description("Returns the row at index.")
                .parameter(
                    ParameterSpec::builder("index", TypeName::integer())
                        .description("Zero-based position")
                        .build(),
                )
                .return_type(TypeName::new("Row"))
                .build(),
        )
        .build();

    insta::assert_snapshot!("protocol_requirements", spec.render());
}

#[test]
fn test_class_with_control_flow() {
    let latest = MethodSpec::builder("latest")
        .return_type(TypeName::date().optional())
        .statement(control_flow::guard_block(
            Some(ComparisonList::new(
                "let first",
                Comparator::OptionalCheck,
                "items.first",
            )),
            || CodeBlock::of("return nil"),
        ))
        .statement(control_flow::for_in("item", "items", || {
            control_flow::if_block(
                Some(ComparisonList::new("item", Comparator::GreaterThan, "first")),
                || CodeBlock::of("return item"),
            )
        }))
        .statement("return first")
        .build();

    let spec = TypeSpec::class_builder("feed")
        .super_type(TypeName::new("UIViewController").with_import("UIKit"))
        .field(
            FieldSpec::builder("items")
                .type_name(TypeName::array(&TypeName::date()))
                .mutable()
                .modifier(Modifier::Private)
                .initializer("[]")
                .build(),
        )
        .method(latest)
        .build();

    insta::assert_snapshot!("class_with_control_flow", spec.render());
}

#[test]
fn test_render_is_deterministic() {
    let spec = TypeSpec::struct_builder("point")
        .field(FieldSpec::builder("a").type_name(TypeName::integer()).build())
        .build();
    assert_eq!(spec.render(), spec.render());
}

#[test]
fn test_render_concurrently_into_separate_writers() {
    let spec = std::sync::Arc::new(test_enum().build());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let spec = std::sync::Arc::clone(&spec);
            std::thread::spawn(move || spec.render())
        })
        .collect();

    let expected = spec.render();
    for handle in handles {
        assert_eq!(handle.join().expect("render thread panicked"), expected);
    }
}
