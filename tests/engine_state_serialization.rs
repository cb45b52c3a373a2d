use targeting::{Coordinate, EngineState, Mode, TargetStack};

#[test]
fn engine_state_serde_roundtrip() {
    let state = EngineState {
        mode: Mode::Target,
        last_attack: Some(Coordinate::new(3, 7)),
        stack: [Coordinate::new(3, 6), Coordinate::new(3, 7)]
            .into_iter()
            .collect::<TargetStack>(),
    };
    let json = serde_json::to_string(&state).unwrap();
    let decoded: EngineState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, state);
    assert_eq!(decoded.stack.peek(), Some(Coordinate::new(3, 7)));
}
