//! Question catalog of the Pavas shopkeeper security survey.
//!
//! Collects qualitative data on robberies and assaults in the commercial
//! areas of Pavas and on how shopkeepers perceive the presence of the Fuerza
//! Pública. Four sections, 24 questions once every follow-up is counted.

pub mod ids;
mod options;

pub use options::*;

use questionnaire::{Catalog, Question, RevealCondition, ScaleQuestion, Section};

const TITLE: &str = "Encuesta sobre Seguridad para Comercios en Pavas";

const PRELUDE: &str = "El objetivo de esta encuesta es recopilar información cualitativa sobre \
las dinámicas de asaltos y robos en las zonas comerciales de Pavas. Los datos son anónimos, \
confidenciales y serán utilizados exclusivamente para proponer mejoras en las estrategias de \
seguridad de la Fuerza Pública.";

const EPILOGUE: &str = "¡Gracias por completar la encuesta! Tus respuestas han sido enviadas.";

/// The complete survey catalog.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        business_section(),
        crime_section(),
        police_section(),
        prevention_section(),
    ])
    .with_title(TITLE)
    .with_prelude(PRELUDE)
    .with_epilogue(EPILOGUE)
}

fn yes() -> RevealCondition {
    RevealCondition::choice_is(SI)
}

fn business_section() -> Section {
    Section::new(
        "Sección 1: Caracterización del Comercio",
        vec![
            Question::single_choice(ids::TIPO_NEGOCIO, "1. Tipo de negocio:", TIPO_NEGOCIO)
                .with_child(
                    Question::free_text(
                        ids::OTRO_NEGOCIO,
                        "Por favor, especifique el tipo de negocio:",
                    )
                    .revealed_when(RevealCondition::choice_is(OTRO))
                    .overriding_parent(),
                ),
            Question::single_choice(
                ids::UBICACION,
                "2. Ubicación general dentro de Pavas:",
                UBICACION,
            ),
            Question::single_choice(
                ids::MANEJA_EFECTIVO,
                "3. ¿Su negocio maneja montos significativos de efectivo de forma visible?",
                SI_NO_A_VECES,
            ),
        ],
    )
}

fn crime_section() -> Section {
    let assault = Question::single_choice(
        ids::VICTIMA_ASALTO,
        "4. ¿Ha sido usted o algún empleado víctima de un ASALTO en el local o sus inmediaciones?",
        SI_NO,
    )
    .with_children([
        Question::single_choice(
            ids::MOVILIZACION,
            "5. ¿Cómo se movilizaban los delincuentes?",
            MOVILIZACION,
        )
        .revealed_when(yes()),
        Question::single_choice(ids::USO_ARMAS, "¿Usaron armas?", SI_NO)
            .revealed_when(yes())
            .with_child(
                Question::free_text(ids::TIPO_ARMA, "¿Qué tipo de arma?").revealed_when(yes()),
            ),
        Question::free_text(
            ids::HORA_ASALTO,
            "¿A qué hora aproximada ocurrió? (Ej: 14:30)",
        )
        .revealed_when(yes()),
        Question::single_choice(
            ids::PRINCIPALES_ROBADO,
            "¿Qué se robaron principalmente?",
            PRINCIPALMENTE_ROBADO,
        )
        .revealed_when(yes())
        .with_child(
            Question::free_text(
                ids::OTRAS_PERTENENCIAS,
                "Por favor, especifique qué otras pertenencias:",
            )
            .revealed_when(RevealCondition::choice_is(OTRAS_PERTENENCIAS)),
        ),
        Question::single_choice(ids::DENUNCIA, "6. ¿Presentó la denuncia?", SI_NO)
            .revealed_when(yes())
            .with_child(
                Question::long_text(ids::RAZON_NO_DENUNCIA, "¿Por qué no presentó la denuncia?")
                    .revealed_when(RevealCondition::choice_is(NO)),
            ),
    ]);

    let vehicles = Question::single_choice(
        ids::ROBO_VEHICULOS,
        "7. ¿Han robado vehículos o artículos DENTRO de vehículos (tacha) de clientes o \
         empleados en el área cercana a su negocio?",
        SI_NO,
    )
    .with_children([
        Question::single_choice(
            ids::TIPO_ROBO_VEHICULO,
            "8. ¿Fue principalmente robo de todo el vehículo o tacha?",
            TIPO_ROBO_VEHICULO,
        )
        .revealed_when(yes()),
        Question::long_text(
            ids::FACILITA_ROBOS,
            "¿Qué cree que facilita estos robos en la zona? (Ej: Poca luz, calles solas, etc.)",
        )
        .revealed_when(yes()),
    ]);

    Section::new(
        "Sección 2: Experiencia Directa con Delitos (Últimos 12 meses)",
        vec![
            assault,
            vehicles,
            Question::long_text(
                ids::PROBLEMATICA_EXTRA,
                "9. ¿Existe alguna otra problemática o delito que esté afectando a su comercio o \
                 clientes?",
            ),
        ],
    )
}

fn police_section() -> Section {
    Section::new(
        "Sección 3: Percepción y Relación con Fuerza Pública",
        vec![
            Question::scale(
                ids::SENTIMIENTO_SEGURIDAD,
                "10. En una escala de 1 a 5, ¿qué tan seguro se siente en su local?",
                ScaleQuestion::from_labels(1, ESCALA_SEGURIDAD),
            ),
            Question::single_choice(
                ids::FRECUENCIA_PATRULLAS,
                "11. ¿Con qué frecuencia ve patrullas de Fuerza Pública en su calle?",
                FRECUENCIA_PATRULLAS,
            ),
            Question::single_choice(
                ids::TIEMPO_RESPUESTA,
                "12. Si ha necesitado a la Fuerza Pública, ¿cómo califica su tiempo de respuesta?",
                CALIFICACION_RESPUESTA,
            ),
            Question::single_choice(
                ids::PRESENCIA_PREVIENE,
                "13. ¿Siente que la presencia policial actual logra prevenir el delito en esta área?",
                PRESENCIA_POLICIAL,
            )
            .with_child(
                Question::long_text(ids::RAZON_PARCIAL, "¿Por qué?")
                    .revealed_when(RevealCondition::choice_is(PARCIALMENTE)),
            ),
        ],
    )
}

fn prevention_section() -> Section {
    Section::new(
        "Sección 4: Medidas de Prevención y Sugerencias",
        vec![
            Question::long_text(
                ids::MEDIDAS_SEGURIDAD,
                "14. ¿Qué medidas de seguridad ha implementado usted en su negocio? (Ej: Alarmas, \
                 cámaras, rejas, etc.)",
            ),
            Question::long_text(
                ids::SUGERENCIA_JEFE_POLICIA,
                "15. Si usted pudiera darle una orden directa al jefe de la policía de Pavas, \
                 ¿cuál sería la acción MÁS URGENTE que le pediría para mejorar la seguridad de \
                 su negocio y la de sus clientes?",
            ),
        ],
    )
}
