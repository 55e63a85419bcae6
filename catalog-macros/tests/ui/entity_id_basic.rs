use catalog_macros::entity_id;

#[entity_id]
struct TagId(String);

#[entity_id]
struct SeqId(u64);

fn main() {
    let id = TagId::new("t-1".to_string());
    let _ = format!("{:?}", id);
    assert_eq!(id.to_string(), "t-1");
    assert_eq!(id.value(), "t-1");

    // FromStr 委托给内部类型
    let seq: SeqId = "42".parse().unwrap();
    assert_eq!(u64::from(seq.clone()), 42);
    assert_eq!(seq, SeqId::from(42));
    assert!("x".parse::<SeqId>().is_err());
}
