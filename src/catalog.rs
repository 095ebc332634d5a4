use crate::models::{Exercise, GrammarCase, Question};

/// Build the fixed practice content: one exercise per grammar case, four questions each.
pub fn build_catalog() -> Vec<Exercise> {
    vec![nominativ(), akkusativ(), dativ(), mixed()]
}

fn nominativ() -> Exercise {
    Exercise {
        grammar_case: GrammarCase::Nominativ,
        instructions: "Wähle den richtigen Artikel für das Subjekt. \
                       Choose the correct article for the subject."
            .to_string(),
        questions: vec![
            Question::new(
                "___ **Brandenburger Tor** ist das Wahrzeichen Berlins.",
                "Das",
                ["Der", "Die", "Das", "Den"],
                "Tor ist neutral (das Tor). Als Subjekt steht es im Nominativ: das. \
                 Tor is neuter, so the subject takes das.",
            ),
            Question::new(
                "___ **Fernsehturm** steht am Alexanderplatz.",
                "Der",
                ["Der", "Die", "Das", "Den"],
                "Turm ist maskulin (der Turm). Nominativ maskulin: der. \
                 Masculine subjects take der.",
            ),
            Question::new(
                "___ **Museumsinsel** liegt mitten in der Spree.",
                "Die",
                ["Der", "Die", "Das", "Dem"],
                "Insel ist feminin (die Insel). Nominativ feminin: die. \
                 Feminine subjects take die.",
            ),
            Question::new(
                "___ **Reichstag** ist der Sitz des Bundestages.",
                "Der",
                ["Der", "Die", "Das", "Den"],
                "Reichstag ist maskulin. Als Subjekt bleibt der Artikel der. \
                 The subject is masculine: der.",
            ),
        ],
    }
}

fn akkusativ() -> Exercise {
    Exercise {
        grammar_case: GrammarCase::Akkusativ,
        instructions: "Wähle den Artikel für das direkte Objekt. \
                       Choose the article for the direct object."
            .to_string(),
        questions: vec![
            Question::new(
                "Wir besuchen ___ **Fernsehturm**.",
                "den",
                ["der", "den", "dem", "das"],
                "besuchen verlangt ein Akkusativobjekt. Maskulin: der wird zu den. \
                 Masculine direct objects change der to den.",
            ),
            Question::new(
                "Ich fotografiere ___ **Brandenburger Tor**.",
                "das",
                ["der", "den", "dem", "das"],
                "Neutrum bleibt im Akkusativ unverändert: das. \
                 Neuter articles do not change in the accusative.",
            ),
            Question::new(
                "Sie bemalt ___ **Mauer** an der East Side Gallery.",
                "die",
                ["der", "die", "den", "dem"],
                "Feminin bleibt im Akkusativ unverändert: die. \
                 Feminine articles do not change in the accusative.",
            ),
            Question::new(
                "Kennst du ___ **Reichstag**?",
                "den",
                ["der", "den", "dem", "des"],
                "kennen braucht ein Akkusativobjekt. Maskulin: den. \
                 The masculine direct object takes den.",
            ),
        ],
    }
}

fn dativ() -> Exercise {
    Exercise {
        grammar_case: GrammarCase::Dativ,
        instructions: "Wähle den Artikel im Dativ, nach Präpositionen oder für das indirekte Objekt. \
                       Choose the dative article."
            .to_string(),
        questions: vec![
            Question::new(
                "Wir fahren mit ___ **U-Bahn** zum Alexanderplatz.",
                "der",
                ["die", "der", "den", "dem"],
                "mit verlangt immer den Dativ. Feminin: die wird zu der. \
                 mit always takes the dative; feminine die becomes der.",
            ),
            Question::new(
                "Nach ___ **Konzert** gehen wir essen.",
                "dem",
                ["das", "dem", "den", "der"],
                "nach verlangt den Dativ. Neutrum: das wird zu dem. \
                 nach takes the dative; neuter das becomes dem.",
            ),
            Question::new(
                "Ich gebe ___ **Touristin** einen Stadtplan.",
                "der",
                ["die", "der", "den", "dem"],
                "Wem gebe ich den Plan? Der Touristin: indirektes Objekt, feminin, Dativ. \
                 The indirect object is feminine: der.",
            ),
            Question::new(
                "Der Guide zeigt ___ **Gast** den Weg.",
                "dem",
                ["der", "den", "dem", "des"],
                "Wem zeigt er den Weg? Dem Gast: maskulin, Dativ. \
                 The masculine indirect object takes dem.",
            ),
        ],
    }
}

fn mixed() -> Exercise {
    Exercise {
        grammar_case: GrammarCase::Mixed,
        instructions: "Alle Fälle gemischt: Bestimme zuerst den Fall. \
                       All cases mixed: decide the case first."
            .to_string(),
        questions: vec![
            Question::new(
                "Wir spazieren durch ___ **Tiergarten**.",
                "den",
                ["der", "den", "dem", "die"],
                "durch verlangt den Akkusativ. Maskulin: den. \
                 durch takes the accusative.",
            ),
            Question::new(
                "Ich wohne bei ___ **Familie** Schneider.",
                "der",
                ["die", "der", "den", "dem"],
                "bei verlangt den Dativ. Feminin: der. \
                 bei takes the dative; feminine die becomes der.",
            ),
            Question::new(
                "___ **Spree** fließt durch Berlin.",
                "Die",
                ["Die", "Der", "Den", "Dem"],
                "Die Spree ist das Subjekt, also Nominativ feminin: die. \
                 The river is the subject: nominative.",
            ),
            Question::new(
                "Er kauft ___ **Ticket** für das Pergamonmuseum.",
                "das",
                ["das", "dem", "den", "der"],
                "kaufen verlangt ein Akkusativobjekt. Neutrum: das. \
                 Neuter direct objects keep das.",
            ),
        ],
    }
}
