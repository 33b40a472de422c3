mod common;

use common::{game, participant, small_group};
use pretty_assertions::assert_eq;
use tournament_standings::config::{AppConfig, ReportSettings};
use tournament_standings::domain::{Color, GroupSnapshot};
use tournament_standings::report::{RoundEntry, build_report, build_rows, encode_report};
use tournament_standings::standings::{StartingPositionPolicy, compute_standings};
use tournament_standings::{ReportError, ReportNotice};

const SNAPSHOT: &str = r#"{
    "groupId": 3,
    "name": "Open A",
    "participants": [
        {
            "id": 1, "groupId": 3, "startingPosition": 1,
            "lastName": "Müller", "firstName": "Kai", "sex": "m",
            "internationalRating": 1960, "federation": "GER",
            "federationId": "12939455", "birthDate": { "year": 1996 }
        },
        {
            "id": 2, "groupId": 3, "startingPosition": 10,
            "lastName": "Zehn", "firstName": "Zora", "sex": "w",
            "nationalRating": 1700, "birthDate": { "year": 2001, "month": 4, "day": 9 }
        },
        {
            "id": 3, "groupId": 3, "startingPosition": 2,
            "lastName": "Zwei", "title": "FM", "birthDate": { "year": 1980, "month": 12 }
        }
    ],
    "games": [
        { "id": 1, "groupId": 3, "round": 1, "boardNumber": 1,
          "whiteParticipantId": 1, "blackParticipantId": 2, "result": "1:0" },
        { "id": 2, "groupId": 3, "round": 2, "boardNumber": 1,
          "whiteParticipantId": 1, "blackParticipantId": 3, "result": "10" }
    ]
}"#;

fn expected_rulers(width: usize) -> (String, String) {
    let decades: String = (1..=width / 10).map(|d| format!("{:>10}", d)).collect();
    let decades = format!("{:<width$}", decades, width = width);
    let digits: String = "1234567890".repeat(width / 10 + 1).chars().take(width).collect();
    (decades, digits)
}

fn without_legend() -> AppConfig {
    let mut config = AppConfig::default();
    config.report.include_legend = false;
    config
}

#[test]
fn reference_row_follows_the_two_ruler_lines() {
    let snapshot = GroupSnapshot::from_json(SNAPSHOT).unwrap();

    let report = build_report(&snapshot, 2, &without_legend()).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    let (decades, digits) = expected_rulers(110);
    assert_eq!(lines[0], decades);
    assert_eq!(lines[1], digits);
    assert_eq!(
        lines[2],
        "001    1 m    Mueller,Kai                       1960 GER    12939455 1996/00/00  2.0    1    10 w 1     2 w 1 "
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn other_rows_of_the_reference_snapshot() {
    let snapshot = GroupSnapshot::from_json(SNAPSHOT).unwrap();

    let report = build_report(&snapshot, 2, &without_legend()).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        lines[3],
        "002    2  FM  Zwei                                                   1980/12/00  0.0    2         Z     1 b 0 "
    );
    assert_eq!(
        lines[4],
        "010    3 w    Zehn,Zora                         1700                 2001/04/09  0.0    3     1 b 0         Z "
    );
}

#[test]
fn legend_line_is_emitted_by_default() {
    let snapshot = GroupSnapshot::from_json(SNAPSHOT).unwrap();

    let report = build_report(&snapshot, 2, &AppConfig::default()).unwrap();
    let legend = report.lines().nth(2).unwrap();

    assert_eq!(
        legend,
        "DDD SSSS sTTT NNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNN RRRR FFF IIIIIIIIIII BBBB/BB/BB PPPP RRRR  OOOO C G  OOOO C G "
    );
}

#[test]
fn every_row_has_one_entry_per_round() {
    let (participants, games) = small_group();
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();

    let rows = build_rows(&standings, &participants, &games, 4, &ReportSettings::default()).unwrap();

    assert!(rows.iter().all(|row| row.rounds.len() == 4));
    for row in &rows {
        assert_eq!(row.rounds[3], RoundEntry::bye());
    }

    let player2 = rows.iter().find(|r| r.participant_id == 2).unwrap();
    assert!(player2.rounds[2].is_bye());
    assert_eq!(player2.rounds[2].result_code, 'Z');
    assert_eq!(
        player2.rounds[1],
        RoundEntry {
            opponent_starting_position: Some(3),
            color: Some(Color::White),
            result_code: '+'
        }
    );
}

#[test]
fn unfinished_and_double_forfeit_games_keep_their_opponent() {
    let (participants, games) = small_group();
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();

    let rows = build_rows(&standings, &participants, &games, 3, &ReportSettings::default()).unwrap();

    let player4 = rows.iter().find(|r| r.participant_id == 4).unwrap();
    assert_eq!(player4.rounds[2].opponent_starting_position, Some(3));
    assert_eq!(player4.rounds[2].color, Some(Color::Black));
    assert_eq!(player4.rounds[2].result_code, 'Z');

    let player5 = rows.iter().find(|r| r.participant_id == 5).unwrap();
    assert_eq!(player5.rounds[2].result_code, '-');
    assert_eq!(player5.rounds[0].result_code, '½');
}

#[test]
fn line_width_is_constant() {
    let (participants, games) = small_group();
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();

    for round_count in [0usize, 1, 3, 9, 12] {
        let rows = build_rows(&standings, &participants, &games, round_count, &ReportSettings::default()).unwrap();
        let report = encode_report(&rows, round_count, &ReportSettings::default()).unwrap();

        let expected = 89 + 10 * round_count + 1;
        assert_eq!(report.lines().count(), 3 + participants.len());
        assert!(report.lines().all(|line| line.chars().count() == expected));
    }
}

#[test]
fn rows_follow_rank_order_with_sequence_index() {
    let (participants, games) = small_group();
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();

    let rows = build_rows(&standings, &participants, &games, 3, &ReportSettings::default()).unwrap();

    let order: Vec<(u32, u32, i64)> = rows.iter().map(|r| (r.sequence_index, r.rank, r.participant_id)).collect();
    assert_eq!(
        order,
        vec![(1, 1, 1), (2, 2, 2), (3, 3, 5), (4, 4, 6), (5, 5, 3), (6, 6, 4)]
    );
    assert_eq!(rows[5].name, "Doerr,Dieter");
}

#[test]
fn missing_standing_fails_the_whole_call() {
    let (participants, games) = small_group();
    let mut standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();
    let dropped = standings.pop().unwrap();

    let result = build_rows(&standings, &participants, &games, 3, &ReportSettings::default());

    assert_eq!(result, Err(ReportError::MissingStanding(dropped.participant_id)));
}

#[test]
fn standing_for_unknown_participant_fails() {
    let (participants, games) = small_group();
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();
    let roster = &participants[..5];
    let games: Vec<_> = games.into_iter().filter(|g| g.white_participant_id != 6 && g.black_participant_id != 6).collect();

    let result = build_rows(&standings, roster, &games, 3, &ReportSettings::default());

    assert_eq!(result, Err(ReportError::MissingStanding(6)));
}

#[test]
fn two_games_in_one_round_are_rejected() {
    let participants = vec![participant(1, 1, "A", ""), participant(2, 2, "B", ""), participant(3, 3, "C", "")];
    let games = vec![game(1, 1, 1, 2, Some("1:0")), game(2, 1, 3, 1, Some("0:1"))];
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();

    let result = build_rows(&standings, &participants, &games, 1, &ReportSettings::default());

    assert_eq!(
        result,
        Err(ReportError::DuplicateRoundGame {
            participant_id: 1,
            round: 1
        })
    );
}

#[test]
fn long_names_are_truncated_and_reported() {
    let participants = vec![
        participant(1, 1, "Wolfeschlegelsteinhausenbergerdorff", "Hubert Blaine"),
        participant(2, 2, "Short", ""),
    ];
    let games = vec![game(1, 1, 1, 2, Some("½:½"))];
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();
    let rows = build_rows(&standings, &participants, &games, 1, &ReportSettings::default()).unwrap();

    let report = encode_report(&rows, 1, &ReportSettings::default()).unwrap();

    assert_eq!(
        report.notices,
        vec![ReportNotice::NameTruncated {
            participant_id: 1,
            original: "Wolfeschlegelsteinhausenbergerdorff,Hubert Blaine".to_string(),
            written: "Wolfeschlegelsteinhausenbergerdor".to_string(),
        }]
    );
    assert!(report.lines().all(|line| line.chars().count() == 100));
}

#[test]
fn oversized_identifier_fails_without_partial_output() {
    let mut participants = vec![participant(1, 1, "A", ""), participant(2, 2, "B", "")];
    participants[1].federation_id = Some("123456789012".to_string());
    let standings = compute_standings(&participants, &[], None, &StartingPositionPolicy).unwrap();
    let rows = build_rows(&standings, &participants, &[], 0, &ReportSettings::default()).unwrap();

    let result = encode_report(&rows, 0, &ReportSettings::default());

    assert!(matches!(
        result,
        Err(ReportError::FieldOverflow { field: "identifier", width: 11, .. })
    ));
}

#[test]
fn round_zero_game_is_rejected_before_encoding() {
    let (participants, mut games) = small_group();
    let standings = compute_standings(&participants, &games, None, &StartingPositionPolicy).unwrap();
    games.push(game(99, 0, 2, 3, Some("1:0")));

    let result = build_rows(&standings, &participants, &games, 3, &ReportSettings::default());

    assert_eq!(result, Err(ReportError::InvalidRound { game_id: 99 }));
}
