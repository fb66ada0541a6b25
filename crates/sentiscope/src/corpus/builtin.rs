//! Mock reviews bundled with the tool.

use super::ReviewCorpus;

const DEMO_REVIEWS: &[(&str, &[&str])] = &[
    (
        "Hotel Sole",
        &[
            "Personale gentile e posizione centrale, camera pulita.",
            "Colazione ottima ma le stanze sono un po' datate.",
            "Servizio eccellente, tornerò sicuramente!",
            "Rumoroso di notte: non ho dormito bene.",
        ],
    ),
    (
        "Hotel Luna",
        &[
            "Vista spettacolare sul mare e camere moderne.",
            "Prezzi troppo alti per quello che offre.",
            "Letti comodi e staff disponibile.",
            "La piscina era chiusa, deluso!",
        ],
    ),
    (
        "Ristorante Mare",
        &[
            "Pesce freschissimo e porzioni abbondanti!",
            "Servizio lento ma qualità del cibo eccezionale.",
            "Prezzi onesti, tornerò di sicuro.",
            "Tavoli troppo vicini, poco spazio.",
        ],
    ),
    (
        "Ristorante Monte",
        &[
            "Atmosfera accogliente e cucina tipica eccellente.",
            "Porzioni piccole per il prezzo pagato.",
            "Personale poco cortese.",
            "Dessert fantastici, consiglio la torta di mele!",
        ],
    ),
];

pub(super) fn demo_corpus() -> ReviewCorpus {
    ReviewCorpus {
        structures: DEMO_REVIEWS
            .iter()
            .map(|(name, reviews)| {
                let reviews = reviews.iter().map(|r| r.to_string()).collect();
                (name.to_string(), reviews)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_corpus_shape() {
        let corpus = demo_corpus();
        assert_eq!(
            corpus.names().collect::<Vec<_>>(),
            vec!["Hotel Sole", "Hotel Luna", "Ristorante Mare", "Ristorante Monte"]
        );
        assert!(corpus.iter().all(|(_, reviews)| reviews.len() == 4));
        assert_eq!(corpus.review_count(), 16);
    }
}
