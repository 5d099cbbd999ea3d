use flexspan::{align, extract, merge, Annotation, DEFAULT_LABEL};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Deliver to 221B Baker Street, London via Acme Corp at 51.5237,-0.1585";
    let annotations = [
        ("Deliver", "O"),
        ("to", "O"),
        ("221B", "NUM"),
        ("Baker", "STREET"),
        ("Street", "STREET"),
        (",", "O"),
        ("London", "CITY"),
        ("via", "O"),
        ("Acme", "Entity"),
        ("Corp", "Entity"),
        ("at", "O"),
        ("51.5237,-0.1585", "GPS"),
    ]
    .map(Annotation::from);

    // Every tag outside `keep` is folded into the default label, so the
    // number, street and city tokens merge into addresses.
    let (tags, words) = extract(&annotations, false, &["O", "GPS", "Entity"], DEFAULT_LABEL);
    let spans = align(&words, text);
    let merged = merge(&tags, &words, &spans)?;

    println!("addresses: {:?}", merged.words_tagged(DEFAULT_LABEL));
    println!("entities:  {:?}", merged.words_tagged("Entity"));
    println!("gps:       {:?}", merged.words_tagged("GPS"));

    Ok(())
}
