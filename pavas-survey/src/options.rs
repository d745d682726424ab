//! Option sets shared by the catalog questions.

pub const SI: &str = "Sí";
pub const NO: &str = "No";
pub const OTRO: &str = "Otro";
pub const OTRAS_PERTENENCIAS: &str = "Otras pertenencias de clientes";
pub const PARCIALMENTE: &str = "Parcialmente";

pub const SI_NO: [&str; 2] = [SI, NO];
pub const SI_NO_A_VECES: [&str; 3] = [SI, NO, "A veces"];

pub const TIPO_NEGOCIO: [&str; 7] = [
    "Pulpería/Minisúper",
    "Farmacia",
    "Restaurante/Soda",
    "Salón de Belleza/Barbería",
    "Taller mecánico",
    "Tienda",
    OTRO,
];

pub const UBICACION: [&str; 4] = ["Circuito 1", "Circuito 2", "Circuito 3", "Circuito 4"];

pub const MOVILIZACION: [&str; 3] = ["A pie", "Motocicleta", "Carro"];

pub const PRINCIPALMENTE_ROBADO: [&str; 3] = ["Efectivo", "Celulares", OTRAS_PERTENENCIAS];

pub const TIPO_ROBO_VEHICULO: [&str; 2] = ["Robo de vehículo", "Tacha"];

/// Labels of the 1-5 security scale.
pub const ESCALA_SEGURIDAD: [&str; 5] =
    ["Muy Inseguro", "Inseguro", "Neutral", "Seguro", "Muy Seguro"];

pub const FRECUENCIA_PATRULLAS: [&str; 4] = [
    "Varias veces al día",
    "Una vez al día",
    "Algunas veces por semana",
    "Casi nunca",
];

pub const CALIFICACION_RESPUESTA: [&str; 6] = [
    "Excelente",
    "Bueno",
    "Regular",
    "Malo",
    "Nunca han llegado",
    "No he necesitado de la Fuerza Pública",
];

pub const PRESENCIA_POLICIAL: [&str; 3] = [SI, NO, PARCIALMENTE];
