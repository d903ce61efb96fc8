//! Legacy seed data for the one-time bulk migration.
//!
//! Mirrors the original static workshop list the site shipped with
//! before content moved into the database. The records intentionally
//! carry no category and mix scalar/list description shapes; both are
//! normalized here at migration time so the schema only ever sees
//! validated rows.

use sitio_core::types::Category;
use sitio_db::models::workshop::CreateWorkshop;
use sqlx::PgPool;

use sitio_db::repositories::WorkshopRepo;

/// Slugs of the seed records that are group workshops. Everything else
/// in the seed list is an individual session.
const TALLER_SLUGS: [&str; 3] = [
    "dar-voz-a-tu-verdad",
    "lealtades-familiares",
    "universo-emociones",
];

/// Description of a legacy seed record. The old data file stored
/// `full_description` sometimes as a single string and sometimes as a
/// paragraph list.
pub enum SeedDescription {
    Text(&'static str),
    Paragraphs(&'static [&'static str]),
}

impl SeedDescription {
    /// Normalize to the stored sequence shape: scalar values are wrapped
    /// as a single-element sequence, lists pass through unchanged.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            SeedDescription::Text(text) => vec![(*text).to_string()],
            SeedDescription::Paragraphs(paragraphs) => {
                paragraphs.iter().map(|p| (*p).to_string()).collect()
            }
        }
    }
}

/// One record of the legacy seed list.
pub struct SeedWorkshop {
    pub id: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: SeedDescription,
    pub ideal_for: &'static [&'static str],
    pub image: &'static str,
    pub cta_link: Option<&'static str>,
}

/// Derive the category of a seed record from its slug.
pub fn category_for(slug: &str) -> Category {
    if TALLER_SLUGS.contains(&slug) {
        Category::Taller
    } else {
        Category::Sesion
    }
}

/// The fixed legacy seed list, in migration order.
pub fn seed_workshops() -> Vec<SeedWorkshop> {
    vec![
        SeedWorkshop {
            id: "dar-voz-a-tu-verdad",
            title: "Dar Voz a tu Verdad",
            short_description: "Taller grupal de expresión y escritura consciente.",
            full_description: SeedDescription::Paragraphs(&[
                "Un espacio grupal para ponerle palabras a lo que callamos.",
                "A través de consignas de escritura y dinámicas de expresión, exploramos la propia historia y la voz que la cuenta.",
            ]),
            ideal_for: &[
                "Personas que sienten que se guardan lo que piensan",
                "Quienes buscan reconectar con su expresión creativa",
            ],
            image: "https://images.sitio.example/talleres/dar-voz.jpg",
            cta_link: None,
        },
        SeedWorkshop {
            id: "lealtades-familiares",
            title: "Lealtades Familiares",
            short_description: "Taller vivencial sobre mandatos y herencias emocionales.",
            full_description: SeedDescription::Paragraphs(&[
                "¿Qué repetimos sin darnos cuenta? ¿A quién le somos fieles cuando nos boicoteamos?",
                "Un recorrido vivencial por los mandatos familiares y las lealtades invisibles que condicionan nuestras decisiones.",
            ]),
            ideal_for: &[
                "Quienes repiten patrones que no logran explicar",
                "Personas en procesos de cambio de ciclo",
            ],
            image: "https://images.sitio.example/talleres/lealtades.jpg",
            cta_link: None,
        },
        SeedWorkshop {
            id: "universo-emociones",
            title: "Universo de Emociones",
            short_description: "Taller de registro y regulación emocional.",
            full_description: SeedDescription::Text(
                "Un taller para aprender a nombrar lo que sentimos. Trabajamos el registro corporal de las emociones y herramientas simples de regulación para la vida cotidiana.",
            ),
            ideal_for: &[
                "Quienes se sienten desbordados por lo que sienten",
                "Personas que quieren ampliar su vocabulario emocional",
            ],
            image: "https://images.sitio.example/talleres/universo.jpg",
            cta_link: None,
        },
        SeedWorkshop {
            id: "sesion-individual",
            title: "Sesión Individual",
            short_description: "Encuentro uno a uno, presencial u online.",
            full_description: SeedDescription::Text(
                "Un espacio personal para trabajar lo que hoy te atraviesa, a tu ritmo y con acompañamiento cercano.",
            ),
            ideal_for: &[
                "Quienes prefieren un trabajo personalizado",
                "Personas atravesando una situación puntual",
            ],
            image: "https://images.sitio.example/sesiones/individual.jpg",
            cta_link: Some("https://wa.me/5491100000000"),
        },
        SeedWorkshop {
            id: "acompanamiento-procesos",
            title: "Acompañamiento de Procesos",
            short_description: "Ciclo de sesiones sostenidas en el tiempo.",
            full_description: SeedDescription::Paragraphs(&[
                "Para procesos que piden continuidad: un ciclo de encuentros pautados con objetivos de trabajo compartidos.",
            ]),
            ideal_for: &["Quienes ya hicieron una primera sesión y quieren profundizar"],
            image: "https://images.sitio.example/sesiones/procesos.jpg",
            cta_link: Some("https://wa.me/5491100000000"),
        },
    ]
}

/// Error from a partially-completed seed migration.
///
/// Earlier creates are not rolled back; `created` reports how many
/// records were committed before the failure.
#[derive(Debug)]
pub struct MigrationFailure {
    pub created: usize,
    pub total: usize,
    pub error: sqlx::Error,
}

/// Run the bulk seed migration: one sequential create per record,
/// aborting on the first failure.
///
/// Sequencing is deliberate: it bounds load on the store and gives a
/// deterministic per-record failure point. The emptiness gate is the
/// caller's responsibility.
pub async fn run(pool: &PgPool) -> Result<usize, MigrationFailure> {
    let seeds = seed_workshops();
    let total = seeds.len();

    for (created, seed) in seeds.iter().enumerate() {
        let input = CreateWorkshop {
            id: Some(seed.id.to_string()),
            title: seed.title.to_string(),
            short_description: seed.short_description.to_string(),
            full_description: seed.full_description.normalize(),
            ideal_for: seed.ideal_for.iter().map(|s| (*s).to_string()).collect(),
            image: seed.image.to_string(),
            category: category_for(seed.id),
            cta_link: seed.cta_link.map(str::to_string),
        };

        if let Err(error) = WorkshopRepo::create(pool, seed.id, &input).await {
            tracing::error!(
                slug = seed.id,
                created,
                total,
                error = %error,
                "Seed migration aborted"
            );
            return Err(MigrationFailure {
                created,
                total,
                error,
            });
        }
        tracing::debug!(slug = seed.id, "Seed record migrated");
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_derivation_for_taller_slugs() {
        for slug in TALLER_SLUGS {
            assert_eq!(category_for(slug), Category::Taller, "slug: {slug}");
        }
    }

    #[test]
    fn test_category_derivation_defaults_to_sesion() {
        assert_eq!(category_for("sesion-individual"), Category::Sesion);
        assert_eq!(category_for("anything-else"), Category::Sesion);
    }

    #[test]
    fn test_scalar_description_wrapped_as_single_element() {
        let desc = SeedDescription::Text("one paragraph");
        assert_eq!(desc.normalize(), vec!["one paragraph".to_string()]);
    }

    #[test]
    fn test_list_description_passes_through() {
        let desc = SeedDescription::Paragraphs(&["a", "b"]);
        assert_eq!(desc.normalize(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_seed_list_has_three_talleres() {
        let talleres = seed_workshops()
            .iter()
            .filter(|s| category_for(s.id) == Category::Taller)
            .count();
        assert_eq!(talleres, 3);
    }
}
