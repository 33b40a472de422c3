#![allow(dead_code)]

use tournament_standings::domain::{BirthDate, Game, Participant, Sex};

pub fn participant(id: i64, start: u32, last_name: &str, first_name: &str) -> Participant {
    Participant {
        id,
        group_id: 1,
        starting_position: start,
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        sex: Some(Sex::Male),
        title: None,
        international_rating: None,
        national_rating: None,
        federation: None,
        federation_id: None,
        national_id: None,
        international_id: None,
        birth_date: BirthDate::year_only(1990).unwrap(),
    }
}

pub fn game(id: i64, round: u32, white: i64, black: i64, result: Option<&str>) -> Game {
    Game {
        id,
        group_id: 1,
        round,
        board_number: 1,
        white_participant_id: white,
        black_participant_id: black,
        result: result.map(|r| r.parse().unwrap()),
    }
}

/// Six players, three rounds, one bye per round for player 6 in round 3
pub fn small_group() -> (Vec<Participant>, Vec<Game>) {
    let participants = vec![
        participant(1, 1, "Adler", "Anna"),
        participant(2, 2, "Becker", "Bernd"),
        participant(3, 3, "Conrad", "Clara"),
        participant(4, 4, "Dörr", "Dieter"),
        participant(5, 5, "Engel", "Eva"),
        participant(6, 6, "Fuchs", "Frank"),
    ];

    let games = vec![
        game(1, 1, 1, 4, Some("1:0")),
        game(2, 1, 5, 2, Some("½:½")),
        game(3, 1, 3, 6, Some("0:1")),
        game(4, 2, 6, 1, Some("½:½")),
        game(5, 2, 2, 3, Some("+:-")),
        game(6, 2, 4, 5, Some("0:1")),
        game(7, 3, 1, 5, Some("-:-")),
        game(8, 3, 3, 4, None),
    ];

    (participants, games)
}
