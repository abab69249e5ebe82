//! Predicts whether a customer buys a car
//! from their age, income, and credit score.
//! 
//! Run with `RUST_LOG=minitree=debug` to see the chosen splits.
use minitree::{
    report,
    Classifier,
    DecisionTreeBuilder,
    Sample,
    TreeConfig,
    TreeError,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Age, Income, Credit Score
    let rows = vec![
        vec![25f64,  50_000f64, 650f64],
        vec![40f64, 100_000f64, 720f64],
        vec![35f64,  85_000f64, 680f64],
        vec![22f64,  45_000f64, 600f64],
        vec![50f64, 120_000f64, 800f64],
    ];
    // 0 = Will Not Buy, 1 = Will Buy
    let labels = vec![0, 1, 1, 0, 1];
    let sample = Sample::new(rows, labels)?;

    let config = TreeConfig::from_json(r#"{ "max_depth": 3 }"#)?;
    let tree = DecisionTreeBuilder::from_config(config)?.build();
    let f = tree.fit(&sample);

    report::print_stats(&tree, &f, &sample);
    println!("{f}");

    let test_row = [30f64, 60_000f64, 700f64];
    let predicted = f.predict(&test_row);
    let answer = if predicted == 1 { "Will Buy" } else { "Will Not Buy" };
    println!("Predicted class: {answer}");

    Ok(())
}
