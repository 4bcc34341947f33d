
use game_client::pokedex::{
    DamageRelation, PokedexFilters, build_entry, filter_entries, load_pokedex,
};
use game_client::translation::FrenchDictionary;
use game_types::EntitySummary;
use test_helpers::*;

#[tokio::test]
async fn test_entry_from_full_records() {
    let catalog = create_test_catalog();
    let entry = build_entry(
        &catalog,
        &FrenchDictionary,
        &EntitySummary {
            id: 5,
            name: "charmeleon".to_string(),
        },
    )
    .await;

    assert_eq!(entry.name, "Reptincel");
    assert_eq!(entry.slug, "charmeleon");
    assert_eq!(entry.types, vec!["feu"]);
    assert_eq!(entry.generation, 1);
    assert_eq!(entry.base_stats.hp, 45);
    assert_eq!(entry.pre_evolution.as_deref(), Some("Salamèche"));
    assert_eq!(
        entry.evolution_line,
        vec!["Salamèche", "Reptincel", "Dracaufeu"]
    );
    assert!(entry.image_url.ends_with("/official-artwork/5.png"));
}

#[tokio::test]
async fn test_entry_lists_primary_type_resistances() {
    let catalog = create_test_catalog();
    let charmander = build_entry(
        &catalog,
        &FrenchDictionary,
        &EntitySummary {
            id: 4,
            name: "charmander".to_string(),
        },
    )
    .await;

    assert_eq!(charmander.resistances.len(), 18);
    let relation_of = |name: &str| {
        charmander
            .resistances
            .iter()
            .find(|r| r.type_name == name)
            .map(|r| r.relation)
    };
    assert_eq!(relation_of("eau"), Some(DamageRelation::Weak));
    assert_eq!(relation_of("acier"), Some(DamageRelation::Resistant));
    assert_eq!(relation_of("électrik"), Some(DamageRelation::Normal));
    assert_eq!(charmander.resistances[0].relation.multiplier(), 2.0);

    // No relations for the primary type: the rest of the entry still builds
    let squirtle = build_entry(
        &catalog,
        &FrenchDictionary,
        &EntitySummary {
            id: 7,
            name: "squirtle".to_string(),
        },
    )
    .await;
    assert_eq!(squirtle.name, "Carapuce");
    assert!(squirtle.resistances.is_empty());
}

#[tokio::test]
async fn test_failed_lookup_gives_minimal_entry() {
    let catalog = create_test_catalog();
    let entry = build_entry(
        &catalog,
        &FrenchDictionary,
        &EntitySummary {
            id: 150,
            name: "mewtwo".to_string(),
        },
    )
    .await;

    assert_eq!(entry.name, "Mewtwo");
    assert!(entry.types.is_empty());
    assert!(entry.evolution_line.is_empty());
    assert_eq!(entry.base_stats.total(), 0);
    assert!(entry.resistances.is_empty());
}

#[tokio::test]
async fn test_load_and_filter_pokedex() {
    let mut catalog = create_test_catalog();
    catalog.unlisted_records.push(EntitySummary {
        id: 150,
        name: "mewtwo".to_string(),
    });

    let entries = load_pokedex(&catalog, &FrenchDictionary, 10).await.unwrap();
    let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 5, 6, 7, 25, 150, 900]);

    // Pikachu has no species data but still gets its dictionary name
    let pikachu = entries.iter().find(|e| e.id == 25).unwrap();
    assert_eq!(pikachu.name, "Pikachu");
    assert_eq!(pikachu.types, vec!["électrik"]);

    let fire = PokedexFilters {
        type_name: Some("feu".to_string()),
        ..Default::default()
    };
    let filtered: Vec<u32> = filter_entries(&entries, &fire).iter().map(|e| e.id).collect();
    assert_eq!(filtered, vec![4, 5, 6]);

    let search = PokedexFilters {
        search: "dracau".to_string(),
        ..Default::default()
    };
    let found = filter_entries(&entries, &search);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].types, vec!["feu", "vol"]);

    let limited = load_pokedex(&catalog, &FrenchDictionary, 2).await.unwrap();
    assert_eq!(limited.len(), 2);
}
