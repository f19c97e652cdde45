use either::Either;
use errors::{Error, SpannedObject};

use crate::{
    actions::{investigation::investigate, test_context::TestContext},
    kinds::{
        kind::{post_increment, read, Instance},
        kind_loader::KindLoader,
    },
    parser::{kind::KindDeclaration, token_utils::TokenStream, tokenize, TokenParser},
    DECLARATIONS, DECLARATIONS_FILE,
};

fn ok<T>(r: Result<T, Error>) -> T {
    match r {
        Ok(t) => t,
        Err(_) => panic!("unexpected diagnostic"),
    }
}

fn loader(source: &str) -> KindLoader {
    let mut cl = KindLoader::new();
    ok(cl.load_string(source, "test.kind"));
    cl
}

fn declarations(source: &str) -> Result<Vec<KindDeclaration>, Error> {
    let total = source.chars().count();
    TokenStream::new(
        tokenize(source, "test.kind")?,
        errors::Span::new("test.kind".to_owned(), total, total),
    )
    .parse()
}

fn name(n: &str) -> SpannedObject<String> {
    SpannedObject::native(n.to_owned())
}

#[test]
fn investigation_prints_nine_lines() {
    let mut cl = KindLoader::new();
    ok(cl.load_string(DECLARATIONS, DECLARATIONS_FILE));
    let mut ctx = TestContext::new();
    ok(investigate(&cl, &mut ctx));
    assert_eq!(
        ctx.print,
        vec![
            "Static 1 i:1",
            "Static 2 i:1",
            "Static 3 i:1",
            "Static 1 i:2",
            "Static 2 i:2",
            "Static 3 i:2",
            "Static 1 i:3",
            "Static 2 i:3",
            "Static 3 i:3",
        ]
    );
}

#[test]
fn instances_share_one_cell() {
    let cl = loader("kind StaticDemo { static i = 1; }");
    let i = name("i");
    let instances = (0..3)
        .map(|_| ok(cl.instantiate(&name("StaticDemo"))))
        .collect::<Vec<_>>();
    ok(post_increment(Either::Left(&instances[2]), &i));
    ok(post_increment(Either::Left(&instances[0]), &i));
    for instance in &instances {
        assert_eq!(ok(read(Either::Left(instance), &i)), 3);
    }
}

#[test]
fn kind_increment_is_seen_by_later_instances() {
    let cl = loader("kind StaticDemo { static i = 1; }");
    let i = name("i");
    let kind = ok(cl.get_native("StaticDemo"));
    ok(post_increment(Either::Right(&*kind), &i));
    let late = Instance::new(kind.clone());
    assert_eq!(ok(read(Either::Left(&late), &i)), 2);
    assert_eq!(ok(read(Either::Right(&*kind), &i)), 2);
}

#[test]
fn reading_does_not_change_the_value() {
    let cl = loader("kind StaticDemo { static i = 1; }");
    let a = ok(cl.instantiate(&name("StaticDemo")));
    for _ in 0..10 {
        assert_eq!(ok(read(Either::Left(&a), &name("i"))), 1);
    }
}

#[test]
fn post_increment_yields_previous_value() {
    let cl = loader("kind StaticDemo { static i = 41; }");
    let a = ok(cl.instantiate(&name("StaticDemo")));
    assert_eq!(ok(post_increment(Either::Left(&a), &name("i"))), 41);
    assert_eq!(ok(read(Either::Left(&a), &name("i"))), 42);
}

#[test]
fn increment_wraps_like_an_int() {
    let cl = loader(&format!("kind Edge {{ static max = {}; }}", i32::MAX));
    let kind = ok(cl.get_native("Edge"));
    ok(post_increment(Either::Right(&*kind), &name("max")));
    assert_eq!(ok(kind.get_static_native("max")).get(), i32::MIN);
}

#[test]
fn dropping_instances_keeps_the_counter() {
    let cl = loader("kind StaticDemo { static i = 1; }");
    {
        let a = ok(cl.instantiate(&name("StaticDemo")));
        ok(post_increment(Either::Left(&a), &name("i")));
    }
    let kind = ok(cl.get_native("StaticDemo"));
    assert_eq!(ok(kind.get_static_native("i")).get(), 2);
}

#[test]
fn kinds_do_not_share_statics() {
    let cl = loader("kind First { static i = 1; } kind Second { static i = 1; }");
    let first = ok(cl.instantiate(&name("First")));
    let second = ok(cl.instantiate(&name("Second")));
    ok(post_increment(Either::Left(&first), &name("i")));
    assert_eq!(ok(read(Either::Left(&first), &name("i"))), 2);
    assert_eq!(ok(read(Either::Left(&second), &name("i"))), 1);
}

#[test]
fn declarations_with_comments_defaults_and_negatives() {
    let decls = ok(declarations(
        "// header\nkind Counter {\n    static zero; // no initializer\n    static low = -5;\n}\n",
    ));
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name.1, "Counter");
    let statics = decls[0]
        .statics
        .iter()
        .map(|s| (s.name.1.as_str(), s.value.1))
        .collect::<Vec<_>>();
    assert_eq!(statics, vec![("zero", 0), ("low", -5)]);
}

#[test]
fn empty_source_loads_nothing() {
    let cl = loader("// nothing here\n");
    assert!(cl.get_native("StaticDemo").is_err());
}

#[test]
fn unknown_names_are_reported() {
    let cl = loader("kind StaticDemo { static i = 1; }");
    assert!(cl.get_native("StaticDemp").is_err());
    assert!(cl.instantiate(&name("Other")).is_err());
    let a = ok(cl.instantiate(&name("StaticDemo")));
    assert!(read(Either::Left(&a), &name("j")).is_err());
    assert!(post_increment(Either::Left(&a), &name("j")).is_err());
}

#[test]
fn duplicate_declarations_are_rejected() {
    let mut cl = KindLoader::new();
    assert!(cl
        .load_string("kind A { static i = 1; static i = 2; }", "test.kind")
        .is_err());
    let mut cl = KindLoader::new();
    assert!(cl
        .load_string("kind A { static i = 1; } kind A { }", "test.kind")
        .is_err());
    assert!(cl.get_native("A").is_err());
    let mut cl = loader("kind A { }");
    assert!(cl.load_string("kind A { }", "other.kind").is_err());
}

#[test]
fn failed_load_registers_nothing() {
    let mut cl = KindLoader::new();
    assert!(cl
        .load_string("kind A { static i = 1; } kind A { }", "test.kind")
        .is_err());
    assert!(cl.get_native("A").is_err());
    assert!(cl.sources().is_empty());

    let mut cl = loader("kind Base { }");
    assert!(cl
        .load_string("kind Fresh { } kind Base { }", "other.kind")
        .is_err());
    assert!(cl.get_native("Fresh").is_err());
    assert!(!cl.sources().contains_key("other.kind"));
    ok(cl.load_string("kind Fresh { }", "other.kind"));
    assert!(cl.get_native("Fresh").is_ok());
}

#[test]
fn same_file_cannot_load_twice() {
    let mut cl = loader("kind A { }");
    assert!(cl.load_string("kind B { }", "test.kind").is_err());
    assert!(cl.get_native("B").is_err());
    assert_eq!(cl.sources()["test.kind"], "kind A { }");
}

#[test]
fn single_declarations_load_directly() {
    let mut cl = KindLoader::new();
    let decls = ok(declarations("kind A { static i = 7; } kind A { }"));
    let mut decls = decls.into_iter();
    if let Some(first) = decls.next() {
        ok(cl.load(first));
    }
    if let Some(second) = decls.next() {
        assert!(cl.load(second).is_err());
    }
    let a = ok(cl.get_native("A"));
    assert_eq!(ok(a.get_static_native("i")).get(), 7);
}

#[test]
fn malformed_sources_are_rejected() {
    for source in [
        "kind A { static i = 1; ",
        "kind A { } }",
        "kind A { static i = 1 }",
        "kind A { static i = ; }",
        "kind A { static I = 1; }",
        "kind a { }",
        "kind A",
        "static i = 1;",
        "kind A { static i = 99999999999; }",
        "kind A { static i = -; }",
        "kind A { static i = 1 / 2; }",
        "kind A { static i # 1; }",
    ]
    .iter()
    {
        assert!(declarations(source).is_err(), "accepted {:?}", source);
    }
}
