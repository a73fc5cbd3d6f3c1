use tracing_subscriber::EnvFilter;
use vault_forecast::{portfolio_apy_projection, Projection, Snapshot};

const DAY_MS: i64 = 86_400_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Raw vault totals as a state reader would return them (6 decimals)
    let history = vec![
        Snapshot::from_vault_state(1_000_000_000u128, 1_000_000_000u128, 6, 0)?,
        Snapshot::from_vault_state(1_021_000_000u128, 1_000_000_000u128, 6, 90 * DAY_MS)?,
        Snapshot::from_vault_state(1_043_500_000u128, 1_000_000_000u128, 6, 180 * DAY_MS)?,
    ];
    let current = history[history.len() - 1];

    match portfolio_apy_projection(&current, &history) {
        Projection::Ready(apy) => println!("Projected APY: {:.2}%", apy),
        Projection::InsufficientData(shortfall) => println!("{}", shortfall),
    }

    // A vault deployed moments ago
    let fresh = [Snapshot::new(1.0, 0), Snapshot::new(1.0, 0)];
    if let Projection::InsufficientData(shortfall) = portfolio_apy_projection(&fresh[0], &fresh) {
        println!("Fresh vault: {}", shortfall);
    }

    Ok(())
}
