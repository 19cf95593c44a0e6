use campus_core::{Campus, Pos, PosType, User};

#[test]
fn pos_serialization_uses_expected_wire_fields() {
    let mut pos = Pos::new("Chaos", PosType::VendingMachine, Campus::Inf).with_address(
        "Im Neuenheimer Feld",
        "205",
        69120,
        "Heidelberg",
    );
    pos.id = Some(3);

    let json = serde_json::to_value(&pos).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["type"], "vending_machine");
    assert_eq!(json["campus"], "inf");
    assert_eq!(json["postal_code"], 69120);
    assert!(json["created_at"].is_null());

    let decoded: Pos = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, pos);
}

#[test]
fn user_without_id_serializes_null_id() {
    let user = User::new("jane_doe", "jane.doe@uni-heidelberg.de", "Jane", "Doe");

    let json = serde_json::to_value(&user).unwrap();
    assert!(json["id"].is_null());
    assert_eq!(json["login_name"], "jane_doe");
}
