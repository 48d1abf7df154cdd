//! HTTP API request / response DTOs.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Customer, CustomerDraft, CustomerPatch, LookupResult, LookupStrategy},
    usecase::UpstreamHealth,
};

/// Body of POST / PUT `/customer`. An `id` field in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRequestDto {
    pub name: String,
    pub email: String,
}

impl From<CustomerRequestDto> for CustomerDraft {
    fn from(dto: CustomerRequestDto) -> Self {
        CustomerDraft::new(dto.name, dto.email)
    }
}

/// Body of PATCH `/customer/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatchDto {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<CustomerPatchDto> for CustomerPatch {
    fn from(dto: CustomerPatchDto) -> Self {
        CustomerPatch {
            name: dto.name,
            email: dto.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.value(),
            name: customer.name,
            email: customer.email,
        }
    }
}

/// Customer plus timing metadata (GET / PUT / PATCH `/customer/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerEnvelopeDto {
    pub customer: CustomerDto,
    pub elapsed_ms: u64,
    pub method: String,
    /// Only present on replace responses
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cache_hit: Option<bool>,
}

/// Dual-source lookup response (`/cep/v1/{key}`, `/cep/v2/{key}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponseDto {
    pub source_a: String,
    pub source_b: String,
    pub elapsed_ms: u64,
    pub strategy: LookupStrategy,
}

impl From<LookupResult> for LookupResponseDto {
    fn from(result: LookupResult) -> Self {
        Self {
            source_a: result.source_a().to_string(),
            source_b: result.source_b().to_string(),
            elapsed_ms: result.elapsed_ms(),
            strategy: result.strategy(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamHealthDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl From<UpstreamHealth> for UpstreamHealthDto {
    fn from(health: UpstreamHealth) -> Self {
        match health {
            UpstreamHealth::Up => Self {
                status: "up".to_string(),
                error: None,
            },
            UpstreamHealth::Down { error } => Self {
                status: "down".to_string(),
                error: Some(error),
            },
        }
    }
}

/// `/api/health` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub upstream: UpstreamHealthDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_response_uses_camel_case() {
        // テスト項目: 検索結果は camelCase のキーでシリアライズされる
        let dto = LookupResponseDto::from(LookupResult::new(
            "a".to_string(),
            "b".to_string(),
            42,
            LookupStrategy::TaskPerCall,
        ));

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({
                "sourceA": "a",
                "sourceB": "b",
                "elapsedMs": 42,
                "strategy": "task-per-call"
            })
        );
    }

    #[test]
    fn test_customer_request_ignores_id() {
        // テスト項目: リクエストボディの id は無視される
        let dto: CustomerRequestDto = serde_json::from_value(serde_json::json!({
            "id": 99,
            "name": "L2",
            "email": "l2@x.com"
        }))
        .unwrap();

        assert_eq!(CustomerDraft::from(dto), CustomerDraft::new("L2", "l2@x.com"));
    }

    #[test]
    fn test_envelope_omits_cache_hit_when_absent() {
        // テスト項目: cacheHit が None の場合はキー自体が出力されない
        let dto = CustomerEnvelopeDto {
            customer: CustomerDto {
                id: 1,
                name: "Lucas".to_string(),
                email: "lucas@email.com".to_string(),
            },
            elapsed_ms: 3,
            method: "getCustomer".to_string(),
            cache_hit: None,
        };

        let json = serde_json::to_value(dto).unwrap();
        assert!(json.get("cacheHit").is_none());
        assert_eq!(json["elapsedMs"], 3);
    }
}
