//! The column-to-predicate mapping table.
//!
//! The person name is read from the first column separately and is not
//! part of the table.

use std::collections::BTreeSet;

use warsa_model::{ConverterKind, LabelLanguage, MappingDescriptor, vocab};

/// Separator of slash-separated cells. Each value may cite its sources.
pub const SLASH: &str = " / ";
/// Separator of semicolon-separated cells.
pub const SEMICOLON: &str = ";";

/// Ordered list of column descriptors. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    descriptors: Vec<MappingDescriptor>,
}

impl MappingTable {
    pub fn new(descriptors: Vec<MappingDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&MappingDescriptor> {
        self.descriptors.iter().find(|d| d.column == column)
    }

    /// Source columns named by the table, in table order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.column.as_str())
    }

    /// Columns the table needs but `headers` does not contain, in table order.
    pub fn missing_columns(&self, headers: &[String]) -> Vec<String> {
        let available: BTreeSet<&str> = headers.iter().map(String::as_str).collect();
        self.columns()
            .filter(|column| !available.contains(column))
            .map(ToString::to_string)
            .collect()
    }

    /// Descriptors carrying a label in `language`.
    pub fn labelled(&self, language: LabelLanguage) -> impl Iterator<Item = &MappingDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.label(language).is_some())
    }

    /// The table for the prisoners of war register.
    pub fn prisoners() -> Self {
        use ConverterKind::{Date, Integer};

        let slash = |column: &str, local: &str| {
            MappingDescriptor::new(column, vocab::schema(local))
                .with_separator(SLASH)
                .with_inline_sources()
        };
        let semicolon = |column: &str, local: &str| {
            MappingDescriptor::new(column, vocab::schema(local)).with_separator(SEMICOLON)
        };
        let single = |column: &str, local: &str| MappingDescriptor::new(column, vocab::schema(local));

        Self::new(vec![
            slash("syntymäaika", "birth_date")
                .with_converter(Date)
                .with_names("Syntymäaika", "Date of birth"),
            slash("syntymäpaikka", "birth_place")
                .with_names("Syntymäkunta", "Municipality of birth"),
            slash("kotipaikka", "home_place").with_names("Kotikunta", "Home municipality"),
            slash("asuinpaikka", "residence_place")
                .with_names("Asuinpaikka", "Municipality of residence"),
            MappingDescriptor::new("ammatti", vocab::bioc("has_occupation"))
                .with_separator(SLASH)
                .with_inline_sources()
                .with_names("Ammatti", "Occupation"),
            slash("siviilisääty", "marital_status").with_names("Siviilisääty", "Marital Status"),
            slash("lasten lkm", "amount_children")
                .with_converter(Integer)
                .with_names("Lasten lukumäärä", "Amount of children"),
            slash("sotilasarvo", "rank").with_names("Sotilasarvo", "Military Rank"),
            single("joukko-osasto", "unit").with_names("Joukko-osasto", "Military Unit"),
            slash("vangiksi aika", "time_captured")
                .with_converter(Date)
                .with_names("Vangiksi jäämisen päivämäärä", "Date captured"),
            slash("vangiksi paikka, kunta", "place_captured_municipality")
                .with_names("Vangiksi jäämisen kunta", "Municipality where captured"),
            slash("vangiksi paikka, kylä, kaupunginosa", "place_captured")
                .with_names("Vangiksi jäämisen paikka", "Place where captured"),
            slash("vangiksi, taistelupaikka", "place_captured_battle").with_names(
                "Vangiksi jäämisen taistelupaikka",
                "Battle location where captured",
            ),
            single("selvitys vangiksi jäämisestä", "explanation")
                .with_names("Selvitys vangiksi jäämisestä", "Description of capturing"),
            slash("palannut", "returned_date")
                .with_converter(Date)
                .with_names("Palaamisaika", "Date of returning"),
            slash("kuollut", "death_date")
                .with_converter(Date)
                .with_names("Kuolinaika", "Date of death"),
            single("kuolinsyy", "cause_of_death").with_names("Kuolinsyy", "Cause of death"),
            slash("kuolinpaikka", "death_place").with_names("kuolinpaikka", "Place of death"),
            semicolon("hautauspaikka", "burial_place")
                .with_names("Hautauspaikka", "Place of burial"),
            semicolon("vankeuspaikat", "camps_and_hospitals")
                .ordered()
                .with_names("Vankeuspaikat", "Captivity locations"),
            semicolon("muita tietoja", "other_information")
                .with_names("Muita tietoja", "Other information"),
            // same predicate as "kuollut", so no label of its own
            slash("palanneiden kuolinaika", "death_date").with_converter(Date),
            single("valokuva", "photograph").with_names("Valokuva", "Photograph"),
            semicolon(
                "radiossa, PM:n valvontatoimiston radiokatsaukset",
                "radio_report",
            )
            .with_names("Radiokatsaus", "Radio report"),
            semicolon(
                "Jatkosodan VEN kuulustelulomakkeet F 473, palautetut",
                "russian_interrogation_sheets",
            )
            .with_names(
                "Jatkosodan venäläiset kuulustelulomakkeet",
                "Russian interrogation sheets",
            ),
            single("Talvisodan kortisto", "winterwar_card_file")
                .with_names("Talvisodan kortisto", "Winter War card file"),
            single(
                "takavarikoitu omaisuus, arvo markoissa",
                "confiscated_possessions",
            )
            .with_names(
                "takavarikoitu omaisuus, arvo markoissa",
                "Confiscated possessions",
            ),
            single("suomenruotsalainen", "swedish_finn")
                .with_names("Suomenruotsalainen", "Swedish finn"),
            single("Karagandan kortisto", "karaganda_card_file")
                .with_names("Karagandan kortisto", "Karaganda card file"),
            single("Jatkosodan kortisto", "continuation_war_card_file")
                .with_names("Jatkosodan kortisto", "Continuation War card file"),
            single(
                "Jatkosodan VEN kuulustelulomakkeet, kuolleet F 465",
                "continuation_war_russian_card_file",
            )
            .with_names(
                "Kuolleiden Jatkosodan venäläiset kuulustelulomakkeet",
                "Continuation War russian card file",
            ),
            single("Talvisodan kokoelma", "winter_war_collection")
                .with_names("Talvisodan kokoelma", "Winter War collection"),
            semicolon(
                "Talvisodan kokoelma, Moskovasta tulevat",
                "winter_war_collection_from_moscow",
            )
            .with_names(
                "Talvisodan kokoelma (Moskovasta)",
                "Winter War collection (Moscow)",
            ),
            semicolon("lentolehtinen", "flyer").with_names("Lentolehtinen", "Flyer"),
            single(
                "muistelmat, lehtijutut, tietokirjat, tutkimukset, Kansa taisteli-lehti",
                "memoirs",
            )
            .with_names("Muistelmat ja lehtijutut", "Memoirs"),
            single("TV-ja radio-ohjelmat, tallenne video/audio", "recording")
                .with_names("Tallenne (video/audio)", "Recording (video/audio)"),
            single(
                "Karjalan kansallisarkiston dokumentit",
                "karelian_archive_documents",
            )
            .with_names(
                "Karjalan kansallisarkiston dokumentit",
                "Karelian archive documents",
            ),
        ])
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingDescriptor;
    type IntoIter = std::slice::Iter<'a, MappingDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prisoner_table_columns_are_unique() {
        let table = MappingTable::prisoners();
        let unique: BTreeSet<&str> = table.columns().collect();
        assert_eq!(unique.len(), table.len());
        assert_eq!(table.len(), 37);
    }

    #[test]
    fn every_labelled_descriptor_has_both_languages() {
        let table = MappingTable::prisoners();
        let fi = table.labelled(LabelLanguage::Fi).count();
        let en = table.labelled(LabelLanguage::En).count();
        assert_eq!(fi, 36);
        assert_eq!(fi, en);
    }

    #[test]
    fn only_slash_columns_carry_sources() {
        for descriptor in &MappingTable::prisoners() {
            if descriptor.inline_sources {
                assert_eq!(descriptor.separator.as_deref(), Some(SLASH), "{}", descriptor.column);
            }
        }
    }

    #[test]
    fn missing_columns_are_reported_in_table_order() {
        let table = MappingTable::new(vec![
            MappingDescriptor::new("b", vocab::schema("b")),
            MappingDescriptor::new("a", vocab::schema("a")),
            MappingDescriptor::new("c", vocab::schema("c")),
        ]);
        let headers = vec!["nimi".to_string(), "a".to_string()];
        assert_eq!(table.missing_columns(&headers), vec!["b", "c"]);
    }
}
