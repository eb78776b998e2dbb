use chrono::{DateTime, Duration, FixedOffset};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use pretty_assertions::assert_eq;
use scheduler::{
    estimate, generate_knockout, generate_round_robin, FixtureGenerator, FixtureService,
    JsonFileSink, MemorySink,
};
use shared::{
    EntityId, Fixture, FixtureDto, FixtureError, GenerationRequest, Participant, TournamentType,
    Venue,
};
use std::collections::{BTreeSet, HashSet};

fn field(count: usize) -> Vec<Participant> {
    (1..=count)
        .map(|i| {
            let name: String = CompanyName().fake();
            Participant::new(i as i64, name.chars().take(100).collect::<String>()).unwrap()
        })
        .collect()
}

fn venues(count: usize) -> Vec<Venue> {
    (1..=count)
        .map(|i| Venue::new(format!("venue/{}", i), format!("Venue {}", i), "Sports Park").unwrap())
        .collect()
}

fn start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-09-14T10:00:00+02:00").unwrap()
}

fn pair_key(fixture: &Fixture) -> (EntityId, EntityId) {
    let (a, b) = fixture.participants().expect("round robin fixtures are concrete");
    if a.id <= b.id {
        (a.id.clone(), b.id.clone())
    } else {
        (b.id.clone(), a.id.clone())
    }
}

#[test]
fn round_robin_every_pair_meets_once() {
    for count in [2usize, 4, 6, 8, 12] {
        let fixtures = generate_round_robin(start(), &field(count), &venues(2)).unwrap();
        assert_eq!(fixtures.len(), count * (count - 1) / 2);

        let pairs: HashSet<(EntityId, EntityId)> = fixtures.iter().map(pair_key).collect();
        assert_eq!(pairs.len(), fixtures.len(), "a pair met twice with {} participants", count);
        assert!(fixtures.iter().all(|f| pair_key(f).0 != pair_key(f).1));
    }
}

#[test]
fn round_robin_odd_field_never_schedules_bye() {
    for count in [3usize, 5, 7, 9] {
        let fixtures = generate_round_robin(start(), &field(count), &venues(3)).unwrap();
        assert_eq!(fixtures.len(), count * (count - 1) / 2);
        assert!(fixtures.iter().all(|f| f.participants().is_some()));
        assert!(fixtures.iter().all(|f| !f.is_walkover()));
    }
}

#[test]
fn round_robin_participant_with_bye_id_is_scheduled() {
    let participants = vec![
        Participant::new("bye", "BYE").unwrap(),
        Participant::new("a", "Alpha").unwrap(),
        Participant::new("b", "Beta").unwrap(),
    ];
    let fixtures = generate_round_robin(start(), &participants, &venues(1)).unwrap();
    assert_eq!(fixtures.len(), 3);
    assert_eq!(
        fixtures.iter().filter(|f| f.involves(&participants[0])).count(),
        2
    );
}

#[test]
fn round_robin_four_participants_example() {
    let participants: Vec<Participant> = ["A", "B", "C", "D"]
        .iter()
        .map(|n| Participant::new(*n, *n).unwrap())
        .collect();
    let fixtures = generate_round_robin(start(), &participants, &venues(1)).unwrap();

    let rounds: BTreeSet<u32> = fixtures.iter().map(|f| f.round).collect();
    assert_eq!(rounds.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

    let opening: Vec<String> = fixtures
        .iter()
        .filter(|f| f.round == 1)
        .map(|f| format!("{}-{}", f.team_a, f.team_b))
        .collect();
    assert_eq!(opening, vec!["A-D", "B-C"]);
}

#[test]
fn round_robin_is_deterministic() {
    let participants = field(7);
    let first = generate_round_robin(start(), &participants, &venues(3)).unwrap();
    let second = generate_round_robin(start(), &participants, &venues(3)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn round_robin_venues_cycle_by_pairing_index() {
    let participants = field(8);
    let venue_list = venues(3);
    let fixtures = generate_round_robin(start(), &participants, &venue_list).unwrap();

    for round in 1..=7u32 {
        let in_round: Vec<&Fixture> = fixtures.iter().filter(|f| f.round == round).collect();
        assert_eq!(in_round.len(), 4);
        for (i, fixture) in in_round.iter().enumerate() {
            assert_eq!(fixture.venue, venue_list[i % venue_list.len()]);
            assert_eq!(
                fixture.scheduled_at,
                start() + Duration::days(i64::from(round) - 1) + Duration::hours(2 * i as i64)
            );
        }
    }
}

#[test]
fn knockout_fixture_count_matches_bracket() {
    for count in 2usize..=33 {
        let fixtures = generate_knockout(start(), &field(count), &venues(2)).unwrap();
        let bracket = count.next_power_of_two();
        assert_eq!(fixtures.len(), bracket - 1, "{} participants", count);
        assert_eq!(
            estimate(TournamentType::Knockout, count).matches,
            fixtures.len()
        );
    }
}

#[test]
fn knockout_opening_round_seats_every_participant_once() {
    let participants = field(11);
    let fixtures = generate_knockout(start(), &participants, &venues(4)).unwrap();

    let seated: Vec<&Participant> = fixtures
        .iter()
        .filter(|f| f.round == 1)
        .flat_map(|f| [f.team_a.participant(), f.team_b.participant()])
        .flatten()
        .collect();
    assert_eq!(seated.len(), participants.len());
    let ids: HashSet<&EntityId> = seated.iter().map(|p| &p.id).collect();
    assert_eq!(ids.len(), participants.len());
}

#[test]
fn knockout_five_participants_example() {
    let fixtures = generate_knockout(start(), &field(5), &venues(1)).unwrap();
    assert_eq!(fixtures.iter().map(|f| f.round).max(), Some(3));
    assert_eq!(fixtures.len(), 7);
}

#[test]
fn empty_venue_list_is_rejected_not_a_panic() {
    assert_eq!(
        generate_round_robin(start(), &field(4), &[]),
        Err(FixtureError::NoVenuesSelected)
    );
    assert_eq!(
        generate_knockout(start(), &field(4), &[]),
        Err(FixtureError::NoVenuesSelected)
    );
}

#[test]
fn estimates_agree_with_round_robin_generation() {
    for count in 2usize..=12 {
        let fixtures = generate_round_robin(start(), &field(count), &venues(2)).unwrap();
        let preview = estimate(TournamentType::RoundRobin, count);
        assert_eq!(preview.matches, fixtures.len());
        assert_eq!(
            preview.rounds,
            fixtures.iter().map(|f| f.round).max().unwrap()
        );
    }
}

#[tokio::test]
async fn request_to_json_file_end_to_end() {
    let request: GenerationRequest = serde_json::from_str(
        r#"{
            "tournamentType": "knockout",
            "startDate": "2024-10-05",
            "startTime": "14:00",
            "matchDuration": 40,
            "breakDuration": 20,
            "timezone": "Europe/Helsinki",
            "spacing": "durations",
            "selectedVenues": [
                {"id": 1, "name": "Hall A", "address": "1 Arena Rd", "timezone": "Europe/Helsinki"},
                {"id": 2, "name": "Hall B", "address": "1 Arena Rd", "timezone": "Europe/Helsinki"}
            ],
            "participants": [
                {"id": 1, "name": "Kotkat"},
                {"id": 2, "name": "Karhut"},
                {"id": 3, "name": "Ilvekset"}
            ]
        }"#,
    )
    .unwrap();

    let path = std::env::temp_dir()
        .join(format!("fixturegen-e2e-{}", std::process::id()))
        .join("fixtures.json");
    let service = FixtureService::new(FixtureGenerator::default(), "UTC", JsonFileSink::new(&path));
    let fixtures = service.generate_and_persist(&request).await.unwrap();
    assert_eq!(fixtures.len(), 3);

    let written: Vec<FixtureDto> =
        serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
    assert_eq!(written.len(), 3);
    assert_eq!(written[0].scheduled_at.to_rfc3339(), "2024-10-05T14:00:00+03:00");
    assert_eq!(written[1].scheduled_at.to_rfc3339(), "2024-10-05T15:00:00+03:00");
    assert_eq!(written[1].team_b, None);
    assert_eq!(written[2].round, 2);
    assert_eq!(written[2].scheduled_at.to_rfc3339(), "2024-10-07T14:00:00+03:00");
    assert!(written.iter().all(|f| f.is_knockout == Some(true)));

    if let Some(dir) = path.parent() {
        tokio::fs::remove_dir_all(dir).await.unwrap();
    }
}

#[tokio::test]
async fn service_rejects_request_without_venues() {
    let request = GenerationRequest {
        tournament_type: TournamentType::RoundRobin,
        start_date: "2024-10-05".to_string(),
        start_time: "14:00".to_string(),
        match_duration: 90,
        break_duration: 30,
        selected_venues: Vec::new(),
        participants: field(4),
        timezone: None,
        spacing: None,
    };
    let service = FixtureService::new(FixtureGenerator::default(), "UTC", MemorySink::new());
    assert_eq!(
        service.generate_and_persist(&request).await,
        Err(FixtureError::NoVenuesSelected)
    );
    assert!(service.sink.fixtures().is_empty());
}
