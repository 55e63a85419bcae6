use catalog_macros::value_object;

#[value_object]
struct Label {
    text: String,
}

#[value_object(debug = false)]
struct Secret(String);

#[value_object]
enum Level {
    Low,
    High,
}

fn main() {
    let a = Label {
        text: "x".to_string(),
    };
    let _ = format!("{:?}", a);
    assert!(a.clone() == a);

    // debug = false 时仅保证可构造与比较
    let s = Secret("k".to_string());
    assert!(s.clone() == s);

    assert!(Level::Low != Level::High);
}
