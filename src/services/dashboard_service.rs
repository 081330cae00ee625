use rand::Rng;

use crate::models::DashboardSummary;
use crate::utils::round_to;

pub fn generate_summary<R: Rng + ?Sized>(rng: &mut R) -> DashboardSummary {
    DashboardSummary {
        total_portfolio_value: round_to(rng.random_range(800_000.0..=1_200_000.0), 2),
        daily_pnl: round_to(rng.random_range(-5_000.0..=15_000.0), 2),
        daily_pnl_percent: round_to(rng.random_range(-1.5..=2.5), 2),
        ytd_return: round_to(rng.random_range(5.0..=25.0), 2),
        active_positions: rng.random_range(15..=35),
        cash_balance: round_to(rng.random_range(50_000.0..=150_000.0), 2),
        margin_used: round_to(rng.random_range(0.0..=30.0), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_summary_ranges() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let s = generate_summary(&mut rng);
            assert!((15..=35).contains(&s.active_positions));
            assert!(s.total_portfolio_value >= 800_000.0 && s.total_portfolio_value <= 1_200_000.0);
            assert!(s.daily_pnl >= -5_000.0 && s.daily_pnl <= 15_000.0);
            assert!(s.cash_balance >= 50_000.0 && s.cash_balance <= 150_000.0);
            assert!(s.margin_used >= 0.0 && s.margin_used <= 30.0);
        }
    }
}
