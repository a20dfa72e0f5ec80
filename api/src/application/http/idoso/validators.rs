use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Distinguishes an absent field (leave untouched) from an explicit `null`
/// (clear the value): absent stays `None`, `null` becomes `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Full CPF validation: 11 digits plus the two check digits.
pub fn validar_cpf(cpf: &str) -> Result<(), ValidationError> {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 || cpf.chars().any(|c| !c.is_ascii_digit()) {
        return Err(ValidationError::new("cpf_tamanho"));
    }
    // All-equal sequences like 00000000000 pass the check-digit math.
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(ValidationError::new("cpf_repetido"));
    }

    for (count, position) in [(9usize, 10u32), (10, 11)] {
        let sum: u32 = digits
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, &d)| d * (position - i as u32))
            .sum();
        let expected = match (sum * 10) % 11 {
            10 => 0,
            rest => rest,
        };
        if digits[count] != expected {
            return Err(ValidationError::new("cpf_digito_verificador"));
        }
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIdosoValidator {
    #[validate(length(min = 3, message = "nome deve ter ao menos 3 caracteres"))]
    pub nome: String,

    #[validate(custom(function = validar_cpf, message = "CPF inválido"))]
    pub cpf: String,

    pub data_nascimento: NaiveDate,

    #[validate(length(min = 1, message = "sexo é obrigatório"))]
    pub sexo: String,

    #[serde(default)]
    pub quarto: Option<String>,

    #[serde(default)]
    pub observacoes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateIdosoValidator {
    #[serde(default)]
    #[validate(length(min = 3, message = "nome deve ter ao menos 3 caracteres"))]
    pub nome: Option<String>,

    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,

    #[serde(default)]
    pub sexo: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub quarto: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub observacoes: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_valid_cpf() {
        assert!(validar_cpf("39053344705").is_ok());
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(validar_cpf("39053344706").is_err());
    }

    #[test]
    fn rejects_repeated_sequences() {
        assert!(validar_cpf("11111111111").is_err());
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(validar_cpf("390.533.447-05").is_err());
    }
}
