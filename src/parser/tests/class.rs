//! Class and class-variable/subroutine-declaration parsing tests.

use super::*;
use crate::ast::{ClassVarKind, ReturnType, SubroutineKind, Type};

#[test]
fn test_empty_class() {
    let class = parse_ok("class Main { }");
    assert_eq!(class.name, "Main");
    assert!(class.class_var_decs.is_empty());
    assert!(class.subroutine_decs.is_empty());
}

#[test]
fn test_class_var_dec_single_name() {
    let class = parse_ok("class Point { field int x; }");
    assert_eq!(class.class_var_decs.len(), 1);
    assert_eq!(class.class_var_decs[0].kind, ClassVarKind::Field);
    assert_eq!(class.class_var_decs[0].ty, Type::Int);
    assert_eq!(class.class_var_decs[0].name, "x");
}

#[test]
fn test_class_var_dec_explodes_multiple_names() {
    let class = parse_ok("class Point { field int x, y; }");
    assert_eq!(class.class_var_decs.len(), 2);
    assert_eq!(class.class_var_decs[0].name, "x");
    assert_eq!(class.class_var_decs[1].name, "y");
    assert_eq!(class.class_var_decs[0].ty, class.class_var_decs[1].ty);
}

#[test]
fn test_class_var_dec_static_vs_field() {
    let class = parse_ok("class Counter { static int total; field int count; }");
    assert_eq!(class.class_var_decs[0].kind, ClassVarKind::Static);
    assert_eq!(class.class_var_decs[1].kind, ClassVarKind::Field);
}

#[test]
fn test_class_var_dec_with_class_name_type() {
    let class = parse_ok("class List { field List next; }");
    assert_eq!(class.class_var_decs[0].ty, Type::ClassName("List".to_string()));
}

#[test]
fn test_subroutine_kinds() {
    let class = parse_ok(
        "class Point {
            constructor Point new() { return this; }
            function void main() { return; }
            method int getX() { return 0; }
        }",
    );
    assert_eq!(class.subroutine_decs[0].kind, SubroutineKind::Constructor);
    assert_eq!(class.subroutine_decs[1].kind, SubroutineKind::Function);
    assert_eq!(class.subroutine_decs[2].kind, SubroutineKind::Method);
}

#[test]
fn test_subroutine_return_type_void() {
    let class = parse_ok("class Main { function void main() { return; } }");
    assert_eq!(class.subroutine_decs[0].return_type, ReturnType::Void);
}

#[test]
fn test_subroutine_return_type_value() {
    let class = parse_ok("class Main { function int main() { return 0; } }");
    assert_eq!(class.subroutine_decs[0].return_type, ReturnType::Type(Type::Int));
}

#[test]
fn test_subroutine_parameter_list() {
    let class = parse_ok("class Point { constructor Point new(int ax, int ay) { return this; } }");
    let params = &class.subroutine_decs[0].params;
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "ax");
    assert_eq!(params[1].name, "ay");
    assert_eq!(params[0].ty, Type::Int);
}

#[test]
fn test_subroutine_empty_parameter_list() {
    let class = parse_ok("class Main { function void main() { return; } }");
    assert!(class.subroutine_decs[0].params.is_empty());
}

#[test]
fn test_subroutine_body_var_decs_before_statements() {
    let class = parse_ok(
        "class Main {
            function void main() {
                var int i, j;
                var boolean done;
                let i = 0;
                return;
            }
        }",
    );
    let body = &class.subroutine_decs[0].body;
    assert_eq!(body.var_decs.len(), 3);
    assert_eq!(body.var_decs[0].name, "i");
    assert_eq!(body.var_decs[1].name, "j");
    assert_eq!(body.var_decs[2].name, "done");
    assert_eq!(body.statements.len(), 2);
}

#[test]
fn test_multiple_subroutines_in_source_order() {
    let class = parse_ok(
        "class Point {
            function Point zero() { return 0; }
            method int getX() { return 0; }
            method void dispose() { return; }
        }",
    );
    assert_eq!(class.subroutine_decs.len(), 3);
    assert_eq!(class.subroutine_decs[0].name, "zero");
    assert_eq!(class.subroutine_decs[1].name, "getX");
    assert_eq!(class.subroutine_decs[2].name, "dispose");
}

#[test]
fn test_class_span_covers_whole_declaration() {
    let src = "class Main { function void main() { return; } }";
    let class = parse_ok(src);
    assert_eq!(class.span.start, 0);
    assert_eq!(class.span.end, src.len());
}
