use crate::config::{CONFERENCE_ROUNDS, DIVISION_ROUNDS, LeagueConfig};
use crate::schedule::generators::ScheduleGenerator;
use crate::schedule::{GameDaySchedule, Matchup, RandomSource, ScheduleAudit, SeasonPhase, shuffle};
use log::{debug, warn};

/// Full regular season: division round robin, conference round robin and
/// out-of-conference games, all driven over one team ordering.
///
/// Team ids start in natural order, so every block of `teams_per_division`
/// positions is one division and every block of `teams_per_conference`
/// positions is one conference. The division and conference phases only move
/// teams inside their block. The out-of-conference phase runs last and rotates
/// the second half of the ordering, so it may carry teams across conference
/// blocks.
pub struct RegularSeasonScheduleGenerator;

impl ScheduleGenerator for RegularSeasonScheduleGenerator {
    fn generate(&self, config: &LeagueConfig, random: &mut dyn RandomSource) -> Vec<GameDaySchedule> {
        let mut teams: Vec<u32> = (1..=config.number_of_teams).collect();
        let mut days = Vec::with_capacity(config.regular_season_days() as usize);

        round_robin_phase(
            &mut teams,
            config.teams_per_division as usize,
            DIVISION_ROUNDS,
            SeasonPhase::Division,
            random,
            &mut days,
        );

        round_robin_phase(
            &mut teams,
            config.teams_per_conference as usize,
            CONFERENCE_ROUNDS,
            SeasonPhase::Conference,
            random,
            &mut days,
        );

        out_of_conference_phase(&mut teams, config.out_of_conference_games, &mut days);

        check_out_of_conference(&days);

        shuffle(random, &mut days);

        debug!("generated {} regular season days", days.len());

        days
    }
}

/// Round robin inside every block of `partition` positions.
///
/// Each block is shuffled once. For an even block the position-0 team stays
/// put as pivot while the remaining positions rotate by one after every series,
/// so every pair meets in exactly one series, `rounds` times.
///
/// An odd block rotates as a whole, with the middle slot sitting out of the
/// block for that series and meeting the middle team of the next block. The
/// `partition - 1` series use all but one of the `partition` arrangements, so
/// the pairs of the unused arrangement never meet and every other pair plays
/// `rounds` times.
pub fn round_robin_phase(
    teams: &mut [u32],
    partition: usize,
    rounds: u32,
    phase: SeasonPhase,
    random: &mut dyn RandomSource,
    days: &mut Vec<GameDaySchedule>,
) {
    if partition < 2 {
        return;
    }

    for block in teams.chunks_exact_mut(partition) {
        shuffle(random, block);
    }

    // `invert` restarts with every series, `flip` runs across all of them
    let mut flip = false;

    for _series in 0..partition - 1 {
        let mut invert = false;

        for _round in 0..rounds {
            let matches = pair_partitions(teams, partition, invert, flip);
            days.push(GameDaySchedule::new(days.len() as u32, phase, matches));

            invert = !invert;
            flip = !flip;
        }

        let rotating = if partition % 2 == 0 { 1 } else { 0 };

        for block in teams.chunks_exact_mut(partition) {
            block[rotating..].rotate_right(1);
        }
    }
}

/// One day of games: position `i` of each block visits the mirrored position.
///
/// The pivot slot follows `flip`, the other slots follow `invert`. With an odd
/// block size the middle team has no partner inside its block and meets the
/// middle team of the next block instead.
pub fn pair_partitions(teams: &[u32], partition: usize, invert: bool, flip: bool) -> Vec<Matchup> {
    let mut matches = Vec::with_capacity(teams.len() / 2);
    let mut unpaired = Vec::new();

    for block in teams.chunks_exact(partition) {
        for slot in 0..partition / 2 {
            let road = block[slot];
            let home = block[partition - 1 - slot];
            let swap = if slot == 0 { flip } else { invert };

            matches.push(Matchup::oriented(home, road, swap));
        }

        if partition % 2 == 1 {
            unpaired.push(block[partition / 2]);
        }
    }

    for pair in unpaired.chunks_exact(2) {
        matches.push(Matchup::oriented(pair[1], pair[0], invert));
    }

    matches
}

/// Mirrored pairing across the whole ordering, so each team in the first half
/// meets a team from the opposite end of the league.
///
/// The first round inverts odd slots and every odd round inverts all slots,
/// which offsets the one-game home/road lean the conference phase leaves
/// behind. The second half rotates by one slot after each round, giving
/// `teams.len() / 2` rounds before any pairing comes back.
pub fn out_of_conference_phase(teams: &mut [u32], rounds: u32, days: &mut Vec<GameDaySchedule>) {
    if teams.len() < 2 {
        return;
    }

    let last = teams.len() - 1;
    let half = teams.len() / 2;

    for round in 0..rounds {
        let matches = (0..half)
            .map(|slot| {
                let invert = round % 2 == 1 || (round == 0 && slot % 2 == 1);
                Matchup::oriented(teams[slot], teams[last - slot], invert)
            })
            .collect();

        days.push(GameDaySchedule::new(days.len() as u32, SeasonPhase::OutOfConference, matches));

        teams[half..].rotate_right(1);
    }
}

fn check_out_of_conference(days: &[GameDaySchedule]) {
    let audit = ScheduleAudit::for_phase(days, SeasonPhase::OutOfConference);
    let repeated = audit.repeated_pairs();

    if !repeated.is_empty() {
        warn!(
            "out-of-conference schedule repeats {} pairings: {:?}",
            repeated.len(),
            repeated
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{IdentityRandom, SeededRandom};
    use itertools::Itertools;

    fn sixteen_team_config() -> LeagueConfig {
        LeagueConfig {
            number_of_teams: 16,
            teams_per_division: 4,
            teams_per_conference: 8,
            games_per_day: 8,
            out_of_conference_games: 8,
            days_in_preseason: 4,
        }
    }

    fn same_block(first: u32, second: u32, size: u32) -> bool {
        (first - 1) / size == (second - 1) / size
    }

    #[test]
    fn test_scenario_day_and_game_counts() {
        let config = LeagueConfig::default();

        let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(2024));

        assert_eq!(days.len(), 52);
        assert!(days.iter().all(|day| day.game_count() == 10));
        assert!(days.iter().all(|day| !day.has_conflict()));

        let audit = ScheduleAudit::from_days(&days);
        for team_id in 1..=20 {
            assert_eq!(audit.appearances(team_id), 52);
        }
    }

    #[test]
    fn test_scenario_home_and_away_even() {
        let config = LeagueConfig::default();

        for seed in [1, 2, 3, 99] {
            let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(seed));
            let audit = ScheduleAudit::from_days(&days);

            for team_id in 1..=20 {
                assert_eq!(audit.home_games[&team_id], 26);
                assert_eq!(audit.away_games[&team_id], 26);
            }
        }
    }

    #[test]
    fn test_ordinals_survive_shuffle() {
        let config = LeagueConfig::default();

        let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(8));

        let ordinals: Vec<u32> = days.iter().map(|day| day.ordinal).sorted().collect();
        assert_eq!(ordinals, (0..52).collect::<Vec<u32>>());

        let division_days = days.iter().filter(|day| day.phase == SeasonPhase::Division).count();
        let conference_days = days.iter().filter(|day| day.phase == SeasonPhase::Conference).count();
        let outside_days = days
            .iter()
            .filter(|day| day.phase == SeasonPhase::OutOfConference)
            .count();

        assert_eq!((division_days, conference_days, outside_days), (16, 27, 9));
    }

    #[test]
    fn test_division_pairs_meet_division_rounds_times() {
        let config = sixteen_team_config();

        for seed in [4, 5, 6] {
            let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(seed));
            let audit = ScheduleAudit::for_phase(&days, SeasonPhase::Division);

            for (first, second) in (1..=16u32).tuple_combinations() {
                let expected = if same_block(first, second, 4) {
                    DIVISION_ROUNDS as usize
                } else {
                    0
                };
                assert_eq!(audit.pair_count(first, second), expected);
            }

            // an even number of rounds per series splits every pairing evenly
            assert_eq!(audit.max_home_imbalance(), 0);
        }
    }

    #[test]
    fn test_odd_divisions_never_double_up_pairs() {
        let config = LeagueConfig::default();

        for seed in [1, 2, 3] {
            let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(seed));
            let audit = ScheduleAudit::for_phase(&days, SeasonPhase::Division);

            for division in 0..4u32 {
                let first_id = division * 5 + 1;
                let counts: Vec<usize> = (first_id..first_id + 5)
                    .tuple_combinations()
                    .map(|(first, second)| audit.pair_count(first, second))
                    .collect();

                // four series over five teams: eight pairs meet, two sit out
                assert!(counts.iter().all(|count| *count == 0 || *count == DIVISION_ROUNDS as usize));
                assert_eq!(counts.iter().filter(|count| **count > 0).count(), 8);
            }

            // the team never left out of its block plays all four others
            let full_schedules = (1..=20u32)
                .filter(|team_id| {
                    (1..=20u32)
                        .filter(|other| other != team_id && same_block(*team_id, *other, 5))
                        .all(|other| audit.pair_count(*team_id, other) > 0)
                })
                .count();
            assert_eq!(full_schedules, 4);
        }
    }

    #[test]
    fn test_odd_block_rotates_whole_block() {
        let mut teams: Vec<u32> = (1..=10).collect();
        let mut days = Vec::new();

        round_robin_phase(&mut teams, 5, 1, SeasonPhase::Division, &mut IdentityRandom, &mut days);

        assert_eq!(teams, vec![2, 3, 4, 5, 1, 7, 8, 9, 10, 6]);
        assert_eq!(days.len(), 4);
        assert_eq!(days[1].matches[0], Matchup::new(5, 4));
        assert_eq!(days[1].matches[4], Matchup::new(7, 2));
    }

    #[test]
    fn test_division_series_alternates_home_and_away() {
        let config = sixteen_team_config();

        let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(12));

        let division_days: Vec<&GameDaySchedule> = days
            .iter()
            .filter(|day| day.phase == SeasonPhase::Division)
            .collect();

        let orientations = division_days
            .iter()
            .flat_map(|day| day.matches.iter())
            .map(|m| (m.home_team_id, m.away_team_id))
            .counts();

        // every ordered pairing shows up exactly twice in its series of four
        assert!(orientations.values().all(|count| *count == 2));
    }

    #[test]
    fn test_conference_pairs_meet_conference_rounds_times() {
        let config = sixteen_team_config();

        let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(21));
        let audit = ScheduleAudit::for_phase(&days, SeasonPhase::Conference);

        for (first, second) in (1..=16u32).tuple_combinations() {
            let expected = if same_block(first, second, 8) {
                CONFERENCE_ROUNDS as usize
            } else {
                0
            };
            assert_eq!(audit.pair_count(first, second), expected);
        }
    }

    #[test]
    fn test_out_of_conference_never_repeats_and_crosses_conferences() {
        let four_conferences = LeagueConfig {
            teams_per_conference: 5,
            out_of_conference_games: 10,
            ..LeagueConfig::default()
        };

        for config in [LeagueConfig::default(), sixteen_team_config(), four_conferences] {
            assert_eq!(config.validate(), Ok(()));

            let days = RegularSeasonScheduleGenerator.generate(&config, &mut SeededRandom::new(77));
            let audit = ScheduleAudit::for_phase(&days, SeasonPhase::OutOfConference);

            assert!(audit.repeated_pairs().is_empty());
            assert!(
                audit
                    .pair_counts
                    .keys()
                    .all(|(first, second)| !same_block(*first, *second, config.teams_per_conference))
            );
        }
    }

    #[test]
    fn test_out_of_conference_cycle_covers_every_opponent() {
        let mut teams: Vec<u32> = (1..=8).collect();
        let mut days = Vec::new();

        out_of_conference_phase(&mut teams, 4, &mut days);

        let audit = ScheduleAudit::from_days(&days);
        for first in 1..=4 {
            for second in 5..=8 {
                assert_eq!(audit.pair_count(first, second), 1);
            }
        }
    }

    #[test]
    fn test_division_pairing_is_deterministic_without_shuffle() {
        let run = || {
            let mut teams: Vec<u32> = (1..=20).collect();
            let mut days = Vec::new();
            round_robin_phase(&mut teams, 5, DIVISION_ROUNDS, SeasonPhase::Division, &mut IdentityRandom, &mut days);
            (teams, days)
        };

        let (first_teams, first_days) = run();
        let (second_teams, second_days) = run();

        assert_eq!(first_days, second_days);
        assert_eq!(first_teams, second_teams);
        assert_eq!(first_days.len(), 16);
    }

    #[test]
    fn test_pair_partitions_mirrors_blocks() {
        let teams: Vec<u32> = (1..=8).collect();

        let matches = pair_partitions(&teams, 4, false, false);
        assert_eq!(
            matches,
            vec![
                Matchup::new(4, 1),
                Matchup::new(3, 2),
                Matchup::new(8, 5),
                Matchup::new(7, 6),
            ]
        );

        let inverted = pair_partitions(&teams, 4, true, false);
        assert_eq!(inverted[0], Matchup::new(4, 1));
        assert_eq!(inverted[1], Matchup::new(2, 3));

        let flipped = pair_partitions(&teams, 4, false, true);
        assert_eq!(flipped[0], Matchup::new(1, 4));
        assert_eq!(flipped[1], Matchup::new(3, 2));
    }

    #[test]
    fn test_odd_partitions_pair_middle_teams() {
        let teams: Vec<u32> = (1..=10).collect();

        let matches = pair_partitions(&teams, 5, false, false);

        assert_eq!(matches.len(), 5);
        assert_eq!(matches[4], Matchup::new(8, 3));
    }

    #[test]
    fn test_block_rotation_keeps_pivot() {
        let mut teams: Vec<u32> = (1..=8).collect();
        let mut days = Vec::new();

        round_robin_phase(&mut teams, 4, 1, SeasonPhase::Division, &mut IdentityRandom, &mut days);

        // three series rotate the trailing three positions back to the start
        assert_eq!(teams, (1..=8).collect::<Vec<u32>>());
        assert_eq!(days[1].matches[0], Matchup::new(1, 3));
        assert!(days.iter().all(|day| day.matches[0].involves(1)));
    }
}
