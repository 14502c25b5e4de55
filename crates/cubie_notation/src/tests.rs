use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn mv(layer: Layer, turns: Turns) -> Move {
    Move::new(layer, turns)
}

#[test]
fn test_parse_simple_algorithm() {
    let expected = vec![
        mv(Layer::Face(Face::R), Turns::Cw),
        mv(Layer::Face(Face::U), Turns::Cw),
        mv(Layer::Face(Face::R), Turns::Ccw),
        mv(Layer::Face(Face::U), Turns::Ccw),
    ];
    assert_eq!(expected, parse_moves("R U R' U'").unwrap());
    let amounts = expected.iter().map(|m| m.turns.amount()).collect::<Vec<_>>();
    assert_eq!(vec![1, 1, -1, -1], amounts);
}

#[test]
fn test_parse_half_turn() {
    let moves = parse_moves("R2").unwrap();
    assert_eq!(vec![mv(Layer::Face(Face::R), Turns::Half)], moves);
    assert_eq!(2, moves[0].turns.amount());
}

#[test]
fn test_parse_wide_and_slice_moves() {
    assert_eq!(
        vec![
            mv(Layer::Wide(Face::U), Turns::Cw),
            mv(Layer::Slice(Slice::M), Turns::Ccw),
            mv(Layer::Slice(Slice::E), Turns::Half),
            mv(Layer::Wide(Face::B), Turns::Ccw),
            mv(Layer::Slice(Slice::S), Turns::Cw),
        ],
        parse_moves("u M' E2 b' S").unwrap(),
    );
}

#[test]
fn test_parse_whitespace() {
    assert_eq!(Vec::<Move>::new(), parse_moves("").unwrap());
    assert_eq!(Vec::<Move>::new(), parse_moves("   \t ").unwrap());
    assert_eq!(
        parse_moves("R U F").unwrap(),
        parse_moves("  R   U\tF\n").unwrap(),
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Err(ParseError::TooLong("R2'".to_owned())),
        parse_moves("R R2' U"),
    );
    assert_eq!(
        Err(ParseError::UnknownLayer {
            token: "X".to_owned(),
            layer: 'X',
        }),
        parse_moves("R X"),
    );
    assert_eq!(
        Err(ParseError::UnknownLayer {
            token: "m".to_owned(),
            layer: 'm',
        }),
        parse_moves("m"),
    );
    assert_eq!(
        Err(ParseError::UnknownSuffix {
            token: "U3".to_owned(),
            suffix: '3',
        }),
        parse_moves("U3"),
    );
    assert_eq!(Err(ParseError::Empty), parse_move(""));

    let e = parse_moves("F Rw").unwrap_err();
    assert_eq!("Rw", e.token());
    assert!(e.to_string().contains("\"Rw\""));
}

#[test]
fn test_layer_symbols() {
    for layer in Layer::ALL {
        assert_eq!(Some(layer), Layer::from_symbol(layer.symbol()));
    }
    assert_eq!('r', Layer::Wide(Face::R).symbol());
    assert_eq!(Face::L, Layer::Slice(Slice::M).reference_face());
    assert_eq!(None, Layer::Slice(Slice::E).outer_face());
    assert!(Layer::Wide(Face::F).includes_middle());
    assert!(!Layer::Face(Face::F).includes_middle());
}

#[test]
fn test_format_and_invert() {
    let moves = parse_moves("R U2 r' M").unwrap();
    assert_eq!("R U2 r' M", format_moves(&moves));
    assert_eq!("M' r U2 R'", format_moves(&invert_moves(&moves)));
}

proptest! {
    #[test]
    fn proptest_format_parse_agree(moves: Vec<Move>) {
        let s = format_moves(&moves);
        prop_assert_eq!(moves, parse_moves(&s).unwrap());
    }

    #[test]
    fn proptest_invert_twice(moves: Vec<Move>) {
        prop_assert_eq!(invert_moves(&invert_moves(&moves)), moves);
    }
}
