//! Basic example demonstrating an EDA quality screen.
//!
//! This example shows how to:
//! 1. Build a small table
//! 2. Profile data quality
//! 3. Screen a column for outliers
//! 4. Estimate intervals for the mean and spread

use eda_stats::prelude::*;

fn main() -> Result<()> {
    println!("=== EDA Quality Screen ===\n");

    let df = create_example_data()?;

    println!("Data dimensions:");
    println!("  Rows:    {}", df.n_rows());
    println!("  Columns: {}", df.n_columns());
    println!();

    // Missing values per column
    println!("=== Data Quality ===\n");
    let nulls = profile_nulls(&df)?;
    print!("{}", nulls);
    println!();

    // Five-number summary and IQR screen on the latency column
    println!("=== Outlier Screen: response_ms ===\n");
    let stats = describe_column(&df, "response_ms")?;
    print!("{}", stats);

    let range = stats.outlier_range(DEFAULT_IQR_FACTOR);
    println!("  Accept range: {}", range);

    let readings = df.numeric_values("response_ms")?;
    let n_outliers = readings.iter().filter(|&&v| range.is_outlier(v)).count();
    println!("  Outliers:     {} of {}", n_outliers, readings.len());
    println!();

    // Tally the binary status column
    println!("=== Flag Tally ===\n");
    let flags = profile_flags(&df.select(&["retried"])?);
    print!("{}", flags);
    println!();

    // Interval estimates from the summary
    println!("=== Interval Estimates (95%) ===\n");
    let mean_ci = ci_mean_t(stats.mean, stats.std_dev, stats.n, DEFAULT_CONFIDENCE_LEVEL)?;
    println!("  Mean:     {}", mean_ci);
    let std_ci = ci_std(stats.std_dev, stats.n, DEFAULT_CONFIDENCE_LEVEL)?;
    println!("  Std dev:  {}", std_ci);
    let var_ci = ci_variance(stats.std_dev, stats.n, DEFAULT_CONFIDENCE_LEVEL)?;
    println!("  Variance: {}", var_ci);

    Ok(())
}

/// Build a small synthetic service-latency table.
fn create_example_data() -> Result<DataFrame> {
    // 24 requests: two dropped measurements and two slow responses.
    let mut rng_seed = 42u64;
    let simple_rand = |seed: &mut u64| -> f64 {
        *seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        ((*seed >> 16) & 0x7FFF) as f64 / 32768.0
    };

    let mut response_ms = Vec::new();
    let mut retried = Vec::new();
    for i in 0..24 {
        let value = match i {
            7 | 19 => None,
            11 | 21 => Some(900.0 + 100.0 * simple_rand(&mut rng_seed)),
            _ => Some(40.0 + 20.0 * simple_rand(&mut rng_seed)),
        };
        response_ms.push(value);
        retried.push(Value::Number(if i % 6 == 0 { 1.0 } else { 0.0 }));
    }

    let mut df = DataFrame::new();
    df.add_numeric_column("response_ms".to_string(), response_ms)?;
    df.add_column("retried".to_string(), retried)?;
    Ok(df)
}
