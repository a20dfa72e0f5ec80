use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    query::schema::{EntitySchema, FieldSpec},
};

/// Clinical assessment of appetite, chewing and swallowing for a resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SemiologiaNutricional {
    pub id: Uuid,
    pub id_idoso: Uuid,
    pub apetite: String,
    pub mastigacao: String,
    pub degluticao: String,
    pub funcionamento_intestinal: String,
    pub observacoes: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub criado_por: Uuid,
    pub atualizado_por: Uuid,
}

impl SemiologiaNutricional {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id_idoso: Uuid,
        apetite: String,
        mastigacao: String,
        degluticao: String,
        funcionamento_intestinal: String,
        observacoes: Option<String>,
        criado_por: Uuid,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            id_idoso,
            apetite,
            mastigacao,
            degluticao,
            funcionamento_intestinal,
            observacoes,
            criado_em: now,
            atualizado_em: now,
            criado_por,
            atualizado_por: criado_por,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        apetite: Option<String>,
        mastigacao: Option<String>,
        degluticao: Option<String>,
        funcionamento_intestinal: Option<String>,
        observacoes: Option<Option<String>>,
        atualizado_por: Uuid,
    ) {
        if let Some(apetite) = apetite {
            self.apetite = apetite;
        }
        if let Some(mastigacao) = mastigacao {
            self.mastigacao = mastigacao;
        }
        if let Some(degluticao) = degluticao {
            self.degluticao = degluticao;
        }
        if let Some(funcionamento_intestinal) = funcionamento_intestinal {
            self.funcionamento_intestinal = funcionamento_intestinal;
        }
        if let Some(observacoes) = observacoes {
            self.observacoes = observacoes;
        }
        self.atualizado_por = atualizado_por;
        self.atualizado_em = Utc::now();
    }
}

/// Anthropometric measurement. BMI is derived from weight and height and
/// recomputed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegistroAntropometrico {
    pub id: Uuid,
    pub id_idoso: Uuid,
    pub peso_kg: f64,
    pub altura_cm: f64,
    pub imc: f64,
    pub circunferencia_braco_cm: Option<f64>,
    pub circunferencia_panturrilha_cm: Option<f64>,
    pub data_registro: NaiveDate,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub criado_por: Uuid,
    pub atualizado_por: Uuid,
}

impl RegistroAntropometrico {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id_idoso: Uuid,
        peso_kg: f64,
        altura_cm: f64,
        circunferencia_braco_cm: Option<f64>,
        circunferencia_panturrilha_cm: Option<f64>,
        data_registro: NaiveDate,
        criado_por: Uuid,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            id_idoso,
            peso_kg,
            altura_cm,
            imc: calcular_imc(peso_kg, altura_cm),
            circunferencia_braco_cm,
            circunferencia_panturrilha_cm,
            data_registro,
            criado_em: now,
            atualizado_em: now,
            criado_por,
            atualizado_por: criado_por,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        peso_kg: Option<f64>,
        altura_cm: Option<f64>,
        circunferencia_braco_cm: Option<Option<f64>>,
        circunferencia_panturrilha_cm: Option<Option<f64>>,
        data_registro: Option<NaiveDate>,
        atualizado_por: Uuid,
    ) {
        if let Some(peso_kg) = peso_kg {
            self.peso_kg = peso_kg;
        }
        if let Some(altura_cm) = altura_cm {
            self.altura_cm = altura_cm;
        }
        if let Some(circunferencia_braco_cm) = circunferencia_braco_cm {
            self.circunferencia_braco_cm = circunferencia_braco_cm;
        }
        if let Some(circunferencia_panturrilha_cm) = circunferencia_panturrilha_cm {
            self.circunferencia_panturrilha_cm = circunferencia_panturrilha_cm;
        }
        if let Some(data_registro) = data_registro {
            self.data_registro = data_registro;
        }
        self.imc = calcular_imc(self.peso_kg, self.altura_cm);
        self.atualizado_por = atualizado_por;
        self.atualizado_em = Utc::now();
    }
}

pub fn calcular_imc(peso_kg: f64, altura_cm: f64) -> f64 {
    let altura_m = altura_cm / 100.0;
    if altura_m <= 0.0 {
        return 0.0;
    }
    peso_kg / (altura_m * altura_m)
}

pub const SEMIOLOGIA_QUERY_SCHEMA: EntitySchema = EntitySchema::new(
    "semiologia_nutricional",
    &[
        ("id_idoso", FieldSpec::uuid()),
        ("apetite", FieldSpec::text()),
        ("mastigacao", FieldSpec::text()),
        ("degluticao", FieldSpec::text()),
        ("funcionamento_intestinal", FieldSpec::text()),
        ("criado_em", FieldSpec::date_time()),
        ("atualizado_em", FieldSpec::date_time()),
    ],
    "criado_em",
);

pub const REGISTRO_QUERY_SCHEMA: EntitySchema = EntitySchema::new(
    "registro_antropometrico",
    &[
        ("id_idoso", FieldSpec::uuid()),
        ("peso_kg", FieldSpec::decimal()),
        ("altura_cm", FieldSpec::decimal()),
        ("imc", FieldSpec::decimal()),
        ("data_registro", FieldSpec::date()),
        ("criado_em", FieldSpec::date_time()),
    ],
    "data_registro",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imc_from_weight_and_height() {
        let imc = calcular_imc(70.0, 175.0);
        assert!((imc - 22.857).abs() < 0.001);
    }

    #[test]
    fn imc_recomputed_on_update() {
        let mut registro = RegistroAntropometrico::new(
            generate_uuid_v7(),
            70.0,
            175.0,
            None,
            None,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            generate_uuid_v7(),
        );
        let imc_inicial = registro.imc;

        registro.update(Some(80.0), None, None, None, None, generate_uuid_v7());

        assert!(registro.imc > imc_inicial);
        assert!((registro.imc - calcular_imc(80.0, 175.0)).abs() < f64::EPSILON);
    }
}
