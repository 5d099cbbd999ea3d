use flexspan::{parse_annotations, LabelPalette, PaletteConfig, VisualizeOptions, Visualizer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=flexspan=debug shows each pipeline stage.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = PaletteConfig::default();
    let palette = LabelPalette::build(&["ORG", "LOC", "PERSON"], Some(&[100, 80, 50][..]), &config)?;
    let visualizer = Visualizer::new(palette);

    let text = "Elon Musk founded OpenAI in California.";
    let annotations = parse_annotations(
        r#"[{"Elon": "PERSON"}, {"Musk": "PERSON"}, {"founded": "O"},
            {"OpenAI": "ORG"}, {"in": "O"}, {"California": "LOC"}]"#,
    )?;

    let options = VisualizeOptions::default()
        .with_split(false)
        .with_keep(["O", "PERSON", "ORG", "LOC"])
        .with_title("Example Visualization")
        .with_save_path("example.html");

    let doc = visualizer.prepare(text, &annotations, &options)?;
    println!("{}", doc.to_json()?);

    visualizer.visualize(text, &annotations, &options)?;
    println!("wrote example.html");

    Ok(())
}
