//! Integration tests for the random number facade and dice values.

use proptest::prelude::*;
use rlutil::{
    random_adjacent, DiceParam, Fraction, Position, Range, RlResult, RngConfig, Rnd,
};

/// Two games started from the same configured seed see identical outcomes.
#[test]
fn test_seeded_games_replay_identically() -> RlResult<()> {
    let config = RngConfig::from_json(r#"{"seed": 98765}"#)?;
    let mut first = Rnd::from_config(&config);
    let mut second = Rnd::from_config(&config);

    let damage: DiceParam = "2d6+1".parse()?;
    let trap = Fraction::new(1, 8);
    let loot_table = [50, 30, 15, 5];
    let spawn = Range::new(2, 5);

    for _ in 0..100 {
        assert_eq!(damage.roll(&mut first), damage.roll(&mut second));
        assert_eq!(trap.roll(&mut first), trap.roll(&mut second));
        assert_eq!(
            first.weighted_choice(&loot_table)?,
            second.weighted_choice(&loot_table)?
        );
        assert_eq!(spawn.roll(&mut first), spawn.roll(&mut second));
        assert_eq!(first.coin_toss(), second.coin_toss());
        assert_eq!(
            random_adjacent(Position::origin(), false, &mut first),
            random_adjacent(Position::origin(), false, &mut second)
        );
    }

    Ok(())
}

#[test]
fn test_every_face_of_a_die_shows_up() {
    let mut rnd = Rnd::new(4242);
    let mut seen = [false; 6];
    for _ in 0..600 {
        let face = rnd.dice(1, 6);
        seen[(face - 1) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_one_in_frequency() {
    let mut rnd = Rnd::new(777);
    let hits = (0..10_000).filter(|_| rnd.one_in(10)).count();
    assert!(hits > 800 && hits < 1200, "hits = {}", hits);
}

#[test]
fn test_percent_chance_frequency() {
    let mut rnd = Rnd::new(31337);
    let hits = (0..10_000).filter(|_| rnd.percent_chance(30)).count();
    assert!(hits > 2700 && hits < 3300, "hits = {}", hits);
}

#[test]
fn test_heavy_weight_dominates() {
    let mut rnd = Rnd::new(55);
    let picks: Vec<usize> = (0..1000)
        .map(|_| rnd.weighted_choice(&[1, 99]).unwrap())
        .collect();
    let heavy = picks.iter().filter(|&&i| i == 1).count();
    assert!(heavy > 950, "heavy = {}", heavy);
}

proptest! {
    #[test]
    fn prop_dice_within_bounds(seed in any::<u64>(), rolls in 0i32..10, sides in 1i32..30, plus in -5i32..5) {
        let mut rnd = Rnd::new(seed);
        let dice = DiceParam::new(rolls, sides, plus);
        let v = dice.roll(&mut rnd);
        prop_assert!(v >= dice.min() && v <= dice.max());
    }

    #[test]
    fn prop_range_inclusive_any_order(seed in any::<u64>(), a in -100i32..100, b in -100i32..100) {
        let mut rnd = Rnd::new(seed);
        let v = rnd.range(a, b);
        prop_assert!(v >= a.min(b) && v <= a.max(b));
    }

    #[test]
    fn prop_weighted_choice_index_valid(seed in any::<u64>(), weights in prop::collection::vec(1i32..100, 1..10)) {
        let mut rnd = Rnd::new(seed);
        let idx = rnd.weighted_choice(&weights).unwrap();
        prop_assert!(idx < weights.len());
    }

    #[test]
    fn prop_dice_display_parses_back(rolls in 0i32..20, sides in 1i32..100, plus in -50i32..50) {
        let dice = DiceParam::new(rolls, sides, plus);
        let parsed: DiceParam = dice.to_string().parse().unwrap();
        prop_assert_eq!(parsed, dice);
    }
}
