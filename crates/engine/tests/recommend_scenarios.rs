//! Integration tests for the single-facet recommendation pipeline.
//!
//! The fixture catalog is a small slice of the real one, chosen so
//! each facet has genuine overlap to find: shared comedy genres, a
//! shared director, and a shared supporting actor.

use catalog::{Catalog, Facet, MovieRecord};
use engine::{MAX_RECOMMENDATIONS, SeedRating, recommend_facet, resolve};

fn movie(
    title: &str,
    genres: &[&str],
    directors: &[&str],
    actors: &[&str],
    imdb_id: &str,
) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
        directors: directors.iter().map(|s| s.to_string()).collect(),
        actors: actors.iter().map(|s| s.to_string()).collect(),
        imdb_id: if imdb_id.is_empty() {
            None
        } else {
            Some(imdb_id.to_string())
        },
    }
}

fn fixture() -> Catalog {
    Catalog::from_records(vec![
        movie(
            "Toy Story (1995)",
            &["Animation", "Comedy", "Family"],
            &["John Lasseter"],
            &["Tom Hanks", "Tim Allen", "Don Rickles"],
            "tt0114709",
        ),
        movie(
            "The Hangover (2009)",
            &["Comedy"],
            &["Todd Phillips"],
            &["Bradley Cooper", "Ed Helms", "Zach Galifianakis"],
            "tt1119646",
        ),
        movie(
            "Forrest Gump (1994)",
            &["Comedy", "Drama", "Romance"],
            &["Robert Zemeckis"],
            &["Tom Hanks", "Robin Wright", "Gary Sinise"],
            "tt0109830",
        ),
        movie(
            "Lincoln (2012)",
            &["Biography", "Drama", "History"],
            &["Steven Spielberg"],
            &["Daniel Day-Lewis", "Sally Field", "Tommy Lee Jones"],
            "tt0443272",
        ),
        movie(
            "Catch Me If You Can (2002)",
            &["Biography", "Crime", "Drama"],
            &["Steven Spielberg"],
            &["Leonardo DiCaprio", "Tom Hanks", "Christopher Walken"],
            "tt0264464",
        ),
        movie(
            "Total Recall (1990)",
            &["Action", "Sci-Fi", "Thriller"],
            &["Paul Verhoeven"],
            &["Arnold Schwarzenegger", "Sharon Stone", "Ronny Cox"],
            "tt0100802",
        ),
        movie(
            "Predator (1987)",
            &["Action", "Sci-Fi", "Thriller"],
            &["John McTiernan"],
            &["Arnold Schwarzenegger", "Carl Weathers", "Jesse Ventura"],
            "tt0093773",
        ),
        movie(
            "Pumping Iron (1977)",
            &["Documentary", "Sport"],
            &["George Butler"],
            &["Arnold Schwarzenegger", "Lou Ferrigno", "Franco Columbu"],
            "tt0076578",
        ),
        movie(
            "RoboCop (1987)",
            &["Action", "Crime", "Sci-Fi"],
            &["Paul Verhoeven"],
            &["Peter Weller", "Nancy Allen", "Ronny Cox"],
            "tt0093870",
        ),
        movie(
            "Heat (1995)",
            &["Action", "Crime", "Drama"],
            &["Michael Mann"],
            &["Al Pacino", "Robert De Niro", "Val Kilmer"],
            "tt0113277",
        ),
        movie("Obscure Short (1921)", &[], &[], &[], ""),
        movie(
            "Step Brothers (2008)",
            &["Comedy"],
            &["Adam McKay"],
            &["Will Ferrell", "John C. Reilly"],
            "tt0838283",
        ),
    ])
}

fn titles_for(catalog: &Catalog, seeds: &[SeedRating], facet: Facet) -> Vec<String> {
    let ranked = recommend_facet(catalog, seeds, facet, MAX_RECOMMENDATIONS);
    resolve(catalog, &ranked).titles
}

#[test]
fn test_genre_recommendation() {
    let catalog = fixture();
    let seeds = vec![SeedRating::new("The Hangover (2009)", 5.0)];

    let titles = titles_for(&catalog, &seeds, Facet::Genre);
    assert!(titles.contains(&"Forrest Gump (1994)".to_string()));
}

#[test]
fn test_genre_recommendation_multiple_ratings() {
    let catalog = fixture();
    let seeds = vec![
        SeedRating::new("The Hangover (2009)", 5.0),
        SeedRating::new("Step Brothers (2008)", 4.5),
    ];

    let titles = titles_for(&catalog, &seeds, Facet::Genre);
    assert!(titles.contains(&"Forrest Gump (1994)".to_string()));
}

#[test]
fn test_director_recommendation() {
    let catalog = fixture();
    let seeds = vec![SeedRating::new("Lincoln (2012)", 5.0)];

    let titles = titles_for(&catalog, &seeds, Facet::Director);
    assert!(titles.contains(&"Catch Me If You Can (2002)".to_string()));
    // The other Spielberg row outranks everything with no director overlap.
    assert_eq!(titles[0], "Catch Me If You Can (2002)");
}

#[test]
fn test_actor_recommendation() {
    let catalog = fixture();
    let seeds = vec![
        SeedRating::new("Total Recall (1990)", 5.0),
        SeedRating::new("Predator (1987)", 5.0),
        SeedRating::new("Pumping Iron (1977)", 5.0),
    ];

    let titles = titles_for(&catalog, &seeds, Facet::Actor);
    // RoboCop shares Ronny Cox with Total Recall; nothing else overlaps.
    assert!(titles.contains(&"RoboCop (1987)".to_string()));
    assert_eq!(titles[0], "RoboCop (1987)");
}

#[test]
fn test_seed_titles_never_recommended() {
    let catalog = fixture();
    let seeds = vec![
        SeedRating::new("The Hangover (2009)", 5.0),
        SeedRating::new("Forrest Gump (1994)", 4.0),
    ];

    for facet in Facet::ALL {
        let titles = titles_for(&catalog, &seeds, facet);
        assert!(!titles.contains(&"The Hangover (2009)".to_string()));
        assert!(!titles.contains(&"Forrest Gump (1994)".to_string()));
    }
}

#[test]
fn test_result_length_bounds() {
    let catalog = fixture();
    let seeds = vec![SeedRating::new("Heat (1995)", 5.0)];

    let titles = titles_for(&catalog, &seeds, Facet::Genre);
    assert!(titles.len() <= MAX_RECOMMENDATIONS);
    assert!(titles.len() <= catalog.len() - 1);
}

#[test]
fn test_empty_seed_list_degenerates_to_catalog_order() {
    let catalog = fixture();
    let ranked = recommend_facet(&catalog, &[], Facet::Genre, MAX_RECOMMENDATIONS);

    assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
    assert!(ranked.iter().all(|c| c.score == 0.0));
    let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
    assert_eq!(rows, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let catalog = fixture();
    let seeds = vec![
        SeedRating::new("Total Recall (1990)", 4.0),
        SeedRating::new("Heat (1995)", 3.5),
    ];

    for facet in Facet::ALL {
        let first = titles_for(&catalog, &seeds, facet);
        let second = titles_for(&catalog, &seeds, facet);
        assert_eq!(first, second);
    }
}

#[test]
fn test_duplicate_seed_pair_does_not_change_result() {
    let catalog = fixture();
    let once = vec![SeedRating::new("The Hangover (2009)", 5.0)];
    let twice = vec![
        SeedRating::new("The Hangover (2009)", 5.0),
        SeedRating::new("The Hangover (2009)", 5.0),
    ];

    assert_eq!(
        titles_for(&catalog, &once, Facet::Genre),
        titles_for(&catalog, &twice, Facet::Genre)
    );
}

#[test]
fn test_unknown_seed_titles_are_tolerated() {
    let catalog = fixture();
    let seeds = vec![
        SeedRating::new("Never Heard Of It (1900)", 5.0),
        SeedRating::new("The Hangover (2009)", 5.0),
    ];

    // The unknown title adds no weight but doesn't error.
    let titles = titles_for(&catalog, &seeds, Facet::Genre);
    assert!(titles.contains(&"Forrest Gump (1994)".to_string()));

    // All-unknown seeds degenerate to catalog order, not a failure.
    let all_unknown = vec![SeedRating::new("Never Heard Of It (1900)", 5.0)];
    let ranked = recommend_facet(&catalog, &all_unknown, Facet::Genre, MAX_RECOMMENDATIONS);
    assert!(ranked.iter().all(|c| c.score == 0.0));
}

#[test]
fn test_payload_fields_stay_aligned() {
    let catalog = fixture();
    let seeds = vec![SeedRating::new("Total Recall (1990)", 5.0)];

    let ranked = recommend_facet(&catalog, &seeds, Facet::Genre, MAX_RECOMMENDATIONS);
    let payload = resolve(&catalog, &ranked);

    assert_eq!(payload.titles.len(), payload.genres.len());
    assert_eq!(payload.titles.len(), payload.imdb_ids.len());

    // Spot-check one row end to end.
    let pos = payload
        .titles
        .iter()
        .position(|t| t == "Predator (1987)")
        .unwrap();
    assert_eq!(payload.genres[pos], ["Action", "Sci-Fi", "Thriller"]);
    assert_eq!(payload.imdb_ids[pos], "tt0093773");
}

#[test]
fn test_higher_rated_seed_lifts_sharing_candidates() {
    let catalog = fixture();

    // With a low rating on Total Recall, RoboCop (shares Ronny Cox)
    // scores 1.0; with a high rating it scores 5.0. Its rank relative
    // to non-sharing candidates can only improve.
    let rank_of = |rating: f64| {
        let seeds = vec![SeedRating::new("Total Recall (1990)", rating)];
        titles_for(&catalog, &seeds, Facet::Actor)
            .iter()
            .position(|t| t == "RoboCop (1987)")
            .unwrap()
    };

    assert!(rank_of(5.0) <= rank_of(1.0));
}
