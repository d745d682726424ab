//! Question ids, which are also the column names of the output file.

pub const TIPO_NEGOCIO: &str = "tipo_negocio";
pub const OTRO_NEGOCIO: &str = "otro_negocio_especificado";
pub const UBICACION: &str = "ubicacion";
pub const MANEJA_EFECTIVO: &str = "maneja_efectivo";

pub const VICTIMA_ASALTO: &str = "victima_asalto";
pub const MOVILIZACION: &str = "movilizacion_delincuentes";
pub const USO_ARMAS: &str = "uso_armas";
pub const TIPO_ARMA: &str = "tipo_arma_especificado";
pub const HORA_ASALTO: &str = "hora_asalto";
pub const PRINCIPALES_ROBADO: &str = "principales_robado";
pub const OTRAS_PERTENENCIAS: &str = "otras_pertenencias_especificadas";
pub const DENUNCIA: &str = "denuncia_presentada";
pub const RAZON_NO_DENUNCIA: &str = "razon_no_denuncia";

pub const ROBO_VEHICULOS: &str = "robo_vehiculos_cerca";
pub const TIPO_ROBO_VEHICULO: &str = "tipo_robo_vehiculo";
pub const FACILITA_ROBOS: &str = "facilita_robos";
pub const PROBLEMATICA_EXTRA: &str = "problematica_extra";

pub const SENTIMIENTO_SEGURIDAD: &str = "sentimiento_seguridad";
pub const FRECUENCIA_PATRULLAS: &str = "frecuencia_patrullas";
pub const TIEMPO_RESPUESTA: &str = "tiempo_respuesta";
pub const PRESENCIA_PREVIENE: &str = "presencia_previene";
pub const RAZON_PARCIAL: &str = "razon_parcial";

pub const MEDIDAS_SEGURIDAD: &str = "medidas_seguridad";
pub const SUGERENCIA_JEFE_POLICIA: &str = "sugerencia_jefe_policia";
