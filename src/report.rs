//! Human-readable summary of a training run.
use colored::Colorize;

use crate::{
    Sample,
    DecisionTree,
    classifier::{Classifier, DecisionTreeClassifier},
    impurity::{gini_impurity, LabelCount},
    constants::{FULL_WIDTH, STAT_WIDTH},
};

/// Returns the stats block of a trained tree,
/// the settings of `tree` followed by the shape of `f`
/// and its error on `sample`.
pub fn stats(
    tree:   &DecisionTree,
    f:      &DecisionTreeClassifier,
    sample: &Sample,
) -> String
{
    let (n_sample, n_feature) = sample.shape();
    let indices = (0..n_sample).collect::<Vec<_>>();
    let root_gini = gini_impurity(&LabelCount::of(sample.target(), &indices));
    let train_error = f.error_rate(sample);

    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "STATS".bold(), "",
    );

    let rows = [
        ("Examples",         format!("{n_sample}")),
        ("Features",         format!("{n_feature}")),
        ("Max depth",        format!("{}", tree.max_depth())),
        ("Split by",         "Gini index".to_string()),
        ("Gini (root)",      format!("{root_gini:.5}")),
        ("Depth",            format!("{}", f.depth())),
        ("Leaves",           format!("{}", f.n_leaves())),
        ("Train error",      format!("{train_error:.5}")),
    ];
    let lines = rows.into_iter()
        .map(|(key, val)| {
            format!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                key.bold(),
                val.bold().green(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{header}\n{lines}\n{:=^FULL_WIDTH$}", "")
}

/// Print [`stats`] to the standard output.
pub fn print_stats(
    tree:   &DecisionTree,
    f:      &DecisionTreeClassifier,
    sample: &Sample,
) {
    println!("\n{}\n", stats(tree, f, sample));
}
