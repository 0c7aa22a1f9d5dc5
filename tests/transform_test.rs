mod common;

use std::collections::BTreeMap;

use rstest::rstest;
use treeglyph::{
    format, format_with, mapping, render, transform, Child, Context, EdgeConfig, Input, Mapping,
    Node, RenderOptions,
};

use common::init_test_setup;

/// JSON-like domain value.
#[derive(Debug, Clone)]
enum Value {
    Str(&'static str),
    Num(f64),
    List(Vec<Value>),
    Object(BTreeMap<&'static str, Value>),
}

/// Maps object entries to named children and lists to positional children.
struct ValueMapping;

impl<'a> Mapping<&'a Value> for ValueMapping {
    fn children(&self, node: &&'a Value) -> Option<Vec<Child<&'a Value>>> {
        let node: &'a Value = *node;
        match node {
            Value::Str(_) | Value::Num(_) => None,
            Value::List(items) => Some(items.iter().map(Child::Node).collect()),
            Value::Object(fields) => Some(
                fields
                    .iter()
                    .map(|(key, value)| Child::named(*key, value))
                    .collect(),
            ),
        }
    }

    fn text(&self, node: &&'a Value, cx: &Context<'_, &'a Value>) -> String {
        let label = match cx.name() {
            Some(name) => name.to_string(),
            None => format!("[{}]", cx.index()),
        };
        match *node {
            Value::Str(s) => format!("{}: {:?}", label, s),
            Value::Num(n) => format!("{}: {}", label, n),
            Value::List(_) => format!("{} ({} items)", label, cx.child_count()),
            Value::Object(_) => label,
        }
    }
}

/// Domain node of the round-trip scenario.
struct Kind {
    kind: &'static str,
    value: Option<&'static str>,
    children: Option<Vec<Kind>>,
}

#[rstest]
fn round_trip_scenario() {
    init_test_setup();
    let tree = Kind {
        kind: "root",
        value: None,
        children: Some(vec![Kind {
            kind: "leaf",
            value: Some("Hi"),
            children: None,
        }]),
    };
    let m = mapping(
        |node: &&Kind| {
            node.children
                .as_ref()
                .map(|children| children.iter().map(Child::Node).collect())
        },
        |node, _| match node.value {
            Some(value) => format!("{}: {:?}", node.kind, value),
            None => node.kind.to_string(),
        },
    );

    assert_eq!(format(&Input::Single(&tree), &m), "root\n└─ leaf: \"Hi\"");
}

#[rstest]
fn json_like_object() {
    init_test_setup();
    let mut fields = BTreeMap::new();
    fields.insert("name", Value::Str("treeglyph"));
    fields.insert(
        "tags",
        Value::List(vec![Value::Str("tree"), Value::Str("text")]),
    );
    fields.insert("version", Value::Num(1.5));
    let doc = Value::Object(fields);

    let expected = "[0]\n\
                    ├─ name: \"treeglyph\"\n\
                    ├─ tags (2 items)\n\
                    │  ├─ [0]: \"tree\"\n\
                    │  └─ [1]: \"text\"\n\
                    └─ version: 1.5";
    assert_eq!(format(&Input::Single(&doc), &ValueMapping), expected);
}

#[rstest]
fn many_roots_render_as_siblings() {
    init_test_setup();
    let values = [Value::Num(1.0), Value::List(vec![Value::Num(2.0)])];
    let input: Input<&Value> = values.iter().collect();

    let opts = RenderOptions::with_glyphs(EdgeConfig::Ascii);
    assert_eq!(
        format_with(&input, &ValueMapping, &opts),
        "|-- [0]: 1\n`-- [1] (1 items)\n    `-- [0]: 2"
    );
}

#[rstest]
fn named_group_synthesizes_one_wrapper() {
    init_test_setup();
    // A function node: parameters are grouped, the body is a named child.
    let m = mapping(
        |node: &&str| match *node {
            "fn" => Some(vec![
                Child::group("params", vec!["a", "b", "c"]),
                Child::named("body", "ret"),
            ]),
            "ret" => Some(vec![Child::Node("a")]),
            _ => None,
        },
        |node, cx| {
            let name = cx.name().map(|n| format!("{}=", n)).unwrap_or_default();
            format!("{}{}#{}", name, node, cx.index())
        },
    );

    let got = transform(&Input::Single("fn"), &m);
    let expected = Node::parent(
        "fn#0",
        vec![
            Node::parent(
                "params",
                vec![Node::leaf("a#0"), Node::leaf("b#1"), Node::leaf("c#2")],
            ),
            Node::parent("body=ret#1", vec![Node::leaf("a#0")]),
        ],
    );
    assert_eq!(got, Input::Single(expected));
}

#[rstest]
#[case::chain(4, 1)]
#[case::binary(3, 2)]
#[case::wide(2, 5)]
fn one_line_per_domain_node(#[case] depth: u32, #[case] fanout: usize) {
    init_test_setup();
    let m = mapping(
        |level: &u32| {
            if *level == 0 {
                None
            } else {
                Some((0..fanout).map(|_| Child::Node(level - 1)).collect())
            }
        },
        |level, cx| format!("{}.{}", level, cx.index()),
    );
    let expected_nodes: usize = (0..=depth).map(|d| fanout.pow(d)).sum();

    let rendered = format(&Input::Single(depth), &m);
    let segments = rendered.lines().filter(|line| !line.trim().is_empty()).count();
    assert_eq!(segments, expected_nodes);

    let tree = transform(&Input::Single(depth), &m);
    let node_count: usize = tree.as_slice().iter().map(Node::node_count).sum();
    assert_eq!(node_count, expected_nodes);
    assert_eq!(render(&tree), rendered);
}
