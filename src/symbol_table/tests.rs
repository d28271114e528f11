use super::*;

#[test]
fn test_define_and_lookup_field() {
    let mut table = SymbolTable::new();
    table.define("size", Type::Int, Kind::Field);

    assert_eq!(table.kind_of("size"), Some(Kind::Field));
    assert_eq!(table.type_of("size"), Some(&Type::Int));
    assert_eq!(table.index_of("size"), Some(0));
}

#[test]
fn test_indices_increment_per_kind_independently() {
    let mut table = SymbolTable::new();
    table.define("a", Type::Int, Kind::Static);
    table.define("b", Type::Int, Kind::Field);
    table.define("c", Type::Int, Kind::Static);
    table.define("d", Type::Int, Kind::Field);

    assert_eq!(table.index_of("a"), Some(0));
    assert_eq!(table.index_of("b"), Some(0));
    assert_eq!(table.index_of("c"), Some(1));
    assert_eq!(table.index_of("d"), Some(1));
}

#[test]
fn test_count_per_kind() {
    let mut table = SymbolTable::new();
    table.define("a", Type::Int, Kind::Field);
    table.define("b", Type::Int, Kind::Field);
    table.define("c", Type::Int, Kind::Static);

    assert_eq!(table.count(Kind::Field), 2);
    assert_eq!(table.count(Kind::Static), 1);
    assert_eq!(table.count(Kind::Argument), 0);
    assert_eq!(table.count(Kind::Local), 0);
}

#[test]
fn test_start_subroutine_clears_subroutine_scope() {
    let mut table = SymbolTable::new();
    table.define("size", Type::Int, Kind::Field);
    table.define("x", Type::Int, Kind::Argument);
    table.define("i", Type::Int, Kind::Local);

    table.start_subroutine();

    assert_eq!(table.kind_of("x"), None);
    assert_eq!(table.kind_of("i"), None);
    assert_eq!(table.count(Kind::Argument), 0);
    assert_eq!(table.count(Kind::Local), 0);
    // class scope survives
    assert_eq!(table.kind_of("size"), Some(Kind::Field));
    assert_eq!(table.count(Kind::Field), 1);
}

#[test]
fn test_argument_and_local_indices_reset_per_subroutine() {
    let mut table = SymbolTable::new();
    table.define("x", Type::Int, Kind::Argument);
    table.define("y", Type::Int, Kind::Argument);
    table.start_subroutine();
    table.define("z", Type::Int, Kind::Argument);

    assert_eq!(table.index_of("z"), Some(0));
}

#[test]
fn test_subroutine_scope_shadows_class_scope() {
    let mut table = SymbolTable::new();
    table.define("x", Type::Int, Kind::Field);
    table.start_subroutine();
    table.define("x", Type::Boolean, Kind::Argument);

    assert_eq!(table.kind_of("x"), Some(Kind::Argument));
    assert_eq!(table.type_of("x"), Some(&Type::Boolean));
    assert_eq!(table.index_of("x"), Some(0));
}

#[test]
fn test_unknown_name_returns_none() {
    let table = SymbolTable::new();
    assert_eq!(table.kind_of("nope"), None);
    assert_eq!(table.type_of("nope"), None);
    assert_eq!(table.index_of("nope"), None);
}

#[test]
fn test_kind_segment_mapping() {
    assert_eq!(Kind::Static.segment(), "static");
    assert_eq!(Kind::Field.segment(), "this");
    assert_eq!(Kind::Argument.segment(), "argument");
    assert_eq!(Kind::Local.segment(), "local");
}

#[test]
fn test_class_name_type_tracked() {
    let mut table = SymbolTable::new();
    table.define("game", Type::ClassName("SquareGame".to_string()), Kind::Field);

    assert_eq!(
        table.type_of("game"),
        Some(&Type::ClassName("SquareGame".to_string()))
    );
}
