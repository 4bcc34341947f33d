//! English catalog keys to French display names.

use game_types::{EntityRecord, SpeciesRecord};

pub const DISPLAY_LANGUAGE: &str = "fr";

/// Catalog type keys and their French names, in catalog order.
pub const TYPE_NAMES: [(&str, &str); 18] = [
    ("normal", "normal"),
    ("fighting", "combat"),
    ("flying", "vol"),
    ("poison", "poison"),
    ("ground", "sol"),
    ("rock", "roche"),
    ("bug", "insecte"),
    ("ghost", "spectre"),
    ("steel", "acier"),
    ("fire", "feu"),
    ("water", "eau"),
    ("grass", "plante"),
    ("electric", "électrik"),
    ("psychic", "psy"),
    ("ice", "glace"),
    ("dragon", "dragon"),
    ("dark", "ténèbres"),
    ("fairy", "fée"),
];

const ENTITY_NAMES: &[(&str, &str)] = &[
    ("bulbasaur", "Bulbizarre"),
    ("ivysaur", "Herbizarre"),
    ("venusaur", "Florizarre"),
    ("charmander", "Salamèche"),
    ("charmeleon", "Reptincel"),
    ("charizard", "Dracaufeu"),
    ("squirtle", "Carapuce"),
    ("wartortle", "Carabaffe"),
    ("blastoise", "Tortank"),
    ("caterpie", "Chenipan"),
    ("metapod", "Chrysacier"),
    ("butterfree", "Papilusion"),
    ("weedle", "Aspicot"),
    ("kakuna", "Coconfort"),
    ("beedrill", "Dardargnan"),
    ("pidgey", "Roucool"),
    ("pidgeotto", "Roucoups"),
    ("pidgeot", "Roucarnage"),
    ("rattata", "Rattata"),
    ("raticate", "Rattatac"),
    ("spearow", "Piafabec"),
    ("fearow", "Rapasdepic"),
    ("ekans", "Abo"),
    ("arbok", "Arbok"),
    ("pikachu", "Pikachu"),
    ("raichu", "Raichu"),
    ("sandshrew", "Sabelette"),
    ("sandslash", "Sablaireau"),
    ("nidoran-f", "Nidoran♀"),
    ("nidorina", "Nidorina"),
    ("nidoqueen", "Nidoqueen"),
    ("nidoran-m", "Nidoran♂"),
    ("nidorino", "Nidorino"),
    ("nidoking", "Nidoking"),
    ("clefairy", "Mélofée"),
    ("clefable", "Mélodelfe"),
    ("vulpix", "Goupix"),
    ("ninetales", "Feunard"),
    ("jigglypuff", "Rondoudou"),
    ("wigglytuff", "Grodoudou"),
    ("zubat", "Nosferapti"),
    ("golbat", "Nosferalto"),
    ("oddish", "Mystherbe"),
    ("gloom", "Ortide"),
    ("vileplume", "Rafflesia"),
    ("paras", "Paras"),
    ("parasect", "Parasect"),
    ("venonat", "Mimitoss"),
    ("venomoth", "Aéromite"),
    ("diglett", "Taupiqueur"),
    ("dugtrio", "Triopikeur"),
    ("meowth", "Miaouss"),
    ("persian", "Persian"),
    ("psyduck", "Psykokwak"),
    ("golduck", "Akwakwak"),
    ("mankey", "Férosinge"),
    ("primeape", "Colossinge"),
    ("growlithe", "Caninos"),
    ("arcanine", "Arcanin"),
    ("poliwag", "Ptitard"),
    ("poliwhirl", "Têtarte"),
    ("poliwrath", "Tartard"),
    ("abra", "Abra"),
    ("kadabra", "Kadabra"),
    ("alakazam", "Alakazam"),
    ("machop", "Machoc"),
    ("machoke", "Machopeur"),
    ("machamp", "Mackogneur"),
    ("bellsprout", "Chétiflor"),
    ("weepinbell", "Boustiflor"),
    ("victreebel", "Empiflor"),
    ("tentacool", "Tentacool"),
    ("tentacruel", "Tentacruel"),
    ("geodude", "Racaillou"),
    ("graveler", "Gravalanch"),
    ("golem", "Grolem"),
    ("ponyta", "Ponyta"),
    ("rapidash", "Galopa"),
    ("slowpoke", "Ramoloss"),
    ("slowbro", "Flagadoss"),
    ("magnemite", "Magnéti"),
    ("magneton", "Magnéton"),
    ("farfetchd", "Canarticho"),
    ("doduo", "Doduo"),
    ("dodrio", "Dodrio"),
    ("seel", "Otaria"),
    ("dewgong", "Lamantine"),
    ("grimer", "Tadmorv"),
    ("muk", "Grotadmorv"),
    ("shellder", "Kokiyas"),
    ("cloyster", "Crustabri"),
    ("gastly", "Fantominus"),
    ("haunter", "Spectrum"),
    ("gengar", "Ectoplasma"),
    ("onix", "Onix"),
    ("drowzee", "Soporifik"),
    ("hypno", "Hypnomade"),
    ("krabby", "Krabby"),
    ("kingler", "Krabboss"),
    ("voltorb", "Voltorbe"),
    ("electrode", "Électrode"),
    ("exeggcute", "Noeunoeuf"),
    ("exeggutor", "Noadkoko"),
    ("cubone", "Osselait"),
    ("marowak", "Ossatueur"),
    ("hitmonlee", "Kicklee"),
    ("hitmonchan", "Tygnon"),
    ("lickitung", "Excelangue"),
    ("koffing", "Smogo"),
    ("weezing", "Smogogo"),
    ("rhyhorn", "Rhinocorne"),
    ("rhydon", "Rhinoféros"),
    ("chansey", "Leveinard"),
    ("tangela", "Saquedeneu"),
    ("kangaskhan", "Kangourex"),
    ("horsea", "Hypotrempe"),
    ("seadra", "Hypocéan"),
    ("goldeen", "Poissirène"),
    ("seaking", "Poissoroy"),
    ("staryu", "Stari"),
    ("starmie", "Staross"),
    ("mr-mime", "M. Mime"),
    ("scyther", "Insécateur"),
    ("jynx", "Lippoutou"),
    ("electabuzz", "Élektek"),
    ("magmar", "Magmar"),
    ("pinsir", "Scarabrute"),
    ("tauros", "Tauros"),
    ("magikarp", "Magicarpe"),
    ("gyarados", "Léviator"),
    ("lapras", "Lokhlass"),
    ("ditto", "Métamorph"),
    ("eevee", "Évoli"),
    ("vaporeon", "Aquali"),
    ("jolteon", "Voltali"),
    ("flareon", "Pyroli"),
    ("porygon", "Porygon"),
    ("omanyte", "Amonita"),
    ("omastar", "Amonistar"),
    ("kabuto", "Kabuto"),
    ("kabutops", "Kabutops"),
    ("aerodactyl", "Ptéra"),
    ("snorlax", "Ronflex"),
    ("articuno", "Artikodin"),
    ("zapdos", "Électhor"),
    ("moltres", "Sulfura"),
    ("dratini", "Minidraco"),
    ("dragonair", "Draco"),
    ("dragonite", "Dracolosse"),
    ("mewtwo", "Mewtwo"),
    ("mew", "Mew"),
];

/// Maps catalog keys to the names shown to the player.
pub trait Translator: Send + Sync {
    /// Language code looked up in species localisations.
    fn language(&self) -> &str;

    /// Display name of a type key; unknown keys pass through.
    fn type_name(&self, type_key: &str) -> String;

    /// Catalog key for a type given by its display name. Catalog keys are
    /// accepted as-is, anything else passes through lowercased.
    fn type_key(&self, type_name: &str) -> String;

    /// Dictionary name for a catalog slug; unknown slugs pass through.
    fn entity_name(&self, slug: &str) -> String;

    /// The name shown to the player. The species' own localisation wins
    /// over the dictionary.
    fn display_name(&self, record: &EntityRecord, species: Option<&SpeciesRecord>) -> String {
        species
            .and_then(|species| species.name_in(self.language()))
            .map(str::to_string)
            .unwrap_or_else(|| self.entity_name(&record.name))
    }
}

/// French display names.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchDictionary;

impl Translator for FrenchDictionary {
    fn language(&self) -> &str {
        DISPLAY_LANGUAGE
    }

    fn type_name(&self, type_key: &str) -> String {
        let key = type_key.trim().to_lowercase();
        TYPE_NAMES
            .iter()
            .find(|(english, _)| *english == key)
            .map(|(_, french)| french.to_string())
            .unwrap_or(key)
    }

    fn type_key(&self, type_name: &str) -> String {
        let name = type_name.trim().to_lowercase();
        TYPE_NAMES
            .iter()
            .find(|(english, french)| *french == name || *english == name)
            .map(|(english, _)| english.to_string())
            .unwrap_or(name)
    }

    fn entity_name(&self, slug: &str) -> String {
        let key = slug.trim().to_lowercase();
        ENTITY_NAMES
            .iter()
            .find(|(english, _)| *english == key)
            .map(|(_, french)| french.to_string())
            .unwrap_or_else(|| slug.to_string())
    }
}
