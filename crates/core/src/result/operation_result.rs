//! Per-operation results.

use super::codes::{ManageDataResultCode, OperationResultCode};
use crate::transaction::OperationType;
use crate::{xdr, AccountId, Asset};
use std::fmt;

/// Pairs an operation arm with its type and the type-specific result code.
macro_rules! type_and_code {
    ($value:expr; $($arm:ident),+ $(,)?) => {
        match $value {
            $(xdr::OperationResultTr::$arm(result) => {
                (OperationType::$arm, i32::from(result.discriminant()))
            })+
        }
    };
}

/// Result of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// The operation ran and produced its own result code.
    Inner(OperationInnerResult),
    /// The operation was rejected before running.
    Failed(OperationResultCode),
}

impl OperationResult {
    /// The result a `ManageData` operation produces.
    pub fn manage_data(code: ManageDataResultCode) -> Self {
        OperationResult::Inner(OperationInnerResult {
            operation: OperationType::ManageData,
            code: code.as_i32(),
            detail: OperationResultDetail::None,
        })
    }

    pub fn code(&self) -> OperationResultCode {
        match self {
            OperationResult::Inner(_) => OperationResultCode::Inner,
            OperationResult::Failed(code) => *code,
        }
    }

    /// Whether the operation ran and reported code 0.
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Inner(inner) if inner.code == 0)
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationResult::Inner(inner) => write!(f, "{inner}"),
            OperationResult::Failed(code) => write!(f, "{code}"),
        }
    }
}

impl From<&xdr::OperationResult> for OperationResult {
    fn from(result: &xdr::OperationResult) -> Self {
        match result {
            xdr::OperationResult::OpInner(inner) => OperationResult::Inner(inner.into()),
            xdr::OperationResult::OpBadAuth => OperationResult::Failed(OperationResultCode::BadAuth),
            xdr::OperationResult::OpNoAccount => {
                OperationResult::Failed(OperationResultCode::NoAccount)
            }
            xdr::OperationResult::OpNotSupported => {
                OperationResult::Failed(OperationResultCode::NotSupported)
            }
            xdr::OperationResult::OpTooManySubentries => {
                OperationResult::Failed(OperationResultCode::TooManySubentries)
            }
            xdr::OperationResult::OpExceededWorkLimit => {
                OperationResult::Failed(OperationResultCode::ExceededWorkLimit)
            }
            xdr::OperationResult::OpTooManySponsoring => {
                OperationResult::Failed(OperationResultCode::TooManySponsoring)
            }
        }
    }
}

/// The result of an operation that ran: its type, its type-specific code and
/// any payload that code carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationInnerResult {
    pub operation: OperationType,
    pub code: i32,
    pub detail: OperationResultDetail,
}

impl OperationInnerResult {
    /// The `ManageData` code, when this is a `ManageData` result.
    pub fn manage_data_code(&self) -> Option<ManageDataResultCode> {
        match self.operation {
            OperationType::ManageData => ManageDataResultCode::from_i32(self.code),
            _ => None,
        }
    }
}

impl fmt::Display for OperationInnerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.manage_data_code() {
            Some(code) => write!(f, "{}: {}", self.operation, code)?,
            None => write!(f, "{}: code {}", self.operation, self.code)?,
        }
        match &self.detail {
            OperationResultDetail::None => Ok(()),
            OperationResultDetail::ManageOffer(offer) => write!(
                f,
                " ({} offers claimed, offer {})",
                offer.offers_claimed.len(),
                offer.offer.name()
            ),
            OperationResultDetail::PathPayment(payment) => write!(
                f,
                " ({} offers claimed, last {} {} to {})",
                payment.offers.len(),
                payment.last.amount,
                payment.last.asset,
                payment.last.destination
            ),
            OperationResultDetail::NoIssuer(asset) => write!(f, " (no issuer for {asset})"),
            OperationResultDetail::AccountMerge(balance) => write!(f, " (balance {balance})"),
            OperationResultDetail::Inflation(payouts) => write!(f, " ({} payouts)", payouts.len()),
            OperationResultDetail::ClaimableBalance(id) => {
                write!(f, " (balance id {})", hex::encode(id))
            }
            OperationResultDetail::HostFunction(hash) => {
                write!(f, " (return value hash {})", hex::encode(hash))
            }
        }
    }
}

impl From<&xdr::OperationResultTr> for OperationInnerResult {
    fn from(result: &xdr::OperationResultTr) -> Self {
        let (operation, code) = type_and_code!(result;
            CreateAccount,
            Payment,
            PathPaymentStrictReceive,
            ManageSellOffer,
            CreatePassiveSellOffer,
            SetOptions,
            ChangeTrust,
            AllowTrust,
            AccountMerge,
            Inflation,
            ManageData,
            BumpSequence,
            ManageBuyOffer,
            PathPaymentStrictSend,
            CreateClaimableBalance,
            ClaimClaimableBalance,
            BeginSponsoringFutureReserves,
            EndSponsoringFutureReserves,
            RevokeSponsorship,
            Clawback,
            ClawbackClaimableBalance,
            SetTrustLineFlags,
            LiquidityPoolDeposit,
            LiquidityPoolWithdraw,
            InvokeHostFunction,
            ExtendFootprintTtl,
            RestoreFootprint,
        );
        Self {
            operation,
            code,
            detail: result.into(),
        }
    }
}

/// Payload attached to an operation result code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationResultDetail {
    #[default]
    None,
    ManageOffer(ManageOfferSuccess),
    PathPayment(PathPaymentSuccess),
    /// The asset whose issuer no longer exists.
    NoIssuer(Asset),
    /// Balance transferred to the merge destination.
    AccountMerge(i64),
    Inflation(Vec<InflationPayout>),
    ClaimableBalance([u8; 32]),
    /// Hash of the host function's return value.
    HostFunction([u8; 32]),
}

impl From<&xdr::OperationResultTr> for OperationResultDetail {
    fn from(result: &xdr::OperationResultTr) -> Self {
        use xdr::OperationResultTr as Tr;

        match result {
            Tr::ManageSellOffer(xdr::ManageSellOfferResult::Success(success))
            | Tr::CreatePassiveSellOffer(xdr::ManageSellOfferResult::Success(success))
            | Tr::ManageBuyOffer(xdr::ManageBuyOfferResult::Success(success)) => {
                OperationResultDetail::ManageOffer(success.into())
            }
            Tr::PathPaymentStrictReceive(xdr::PathPaymentStrictReceiveResult::Success(success)) => {
                OperationResultDetail::PathPayment(PathPaymentSuccess::new(
                    &success.offers,
                    &success.last,
                ))
            }
            Tr::PathPaymentStrictSend(xdr::PathPaymentStrictSendResult::Success(success)) => {
                OperationResultDetail::PathPayment(PathPaymentSuccess::new(
                    &success.offers,
                    &success.last,
                ))
            }
            Tr::PathPaymentStrictReceive(xdr::PathPaymentStrictReceiveResult::NoIssuer(asset))
            | Tr::PathPaymentStrictSend(xdr::PathPaymentStrictSendResult::NoIssuer(asset)) => {
                OperationResultDetail::NoIssuer(asset.into())
            }
            Tr::AccountMerge(xdr::AccountMergeResult::Success(balance)) => {
                OperationResultDetail::AccountMerge(*balance)
            }
            Tr::Inflation(xdr::InflationResult::Success(payouts)) => {
                OperationResultDetail::Inflation(payouts.iter().map(InflationPayout::from).collect())
            }
            Tr::CreateClaimableBalance(xdr::CreateClaimableBalanceResult::Success(
                xdr::ClaimableBalanceId::ClaimableBalanceIdTypeV0(xdr::Hash(id)),
            )) => OperationResultDetail::ClaimableBalance(*id),
            Tr::InvokeHostFunction(xdr::InvokeHostFunctionResult::Success(xdr::Hash(hash))) => {
                OperationResultDetail::HostFunction(*hash)
            }
            _ => OperationResultDetail::None,
        }
    }
}

/// Price as a fraction `n / d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl From<&xdr::Price> for Price {
    fn from(price: &xdr::Price) -> Self {
        Self {
            n: price.n,
            d: price.d,
        }
    }
}

/// An offer standing on the order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferEntry {
    pub seller_id: AccountId,
    pub offer_id: i64,
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub flags: u32,
}

impl From<&xdr::OfferEntry> for OfferEntry {
    fn from(entry: &xdr::OfferEntry) -> Self {
        Self {
            seller_id: (&entry.seller_id).into(),
            offer_id: entry.offer_id,
            selling: (&entry.selling).into(),
            buying: (&entry.buying).into(),
            amount: entry.amount,
            price: (&entry.price).into(),
            flags: entry.flags,
        }
    }
}

/// Counterparty of a trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimSource {
    /// Pre-protocol-18 atom holding the raw seller key.
    V0 { seller: [u8; 32], offer_id: i64 },
    OrderBook { seller: AccountId, offer_id: i64 },
    LiquidityPool { pool_id: [u8; 32] },
}

/// One trade executed while applying an offer or path payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimAtom {
    pub source: ClaimSource,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

impl ClaimAtom {
    fn trade(
        source: ClaimSource,
        asset_sold: &xdr::Asset,
        amount_sold: i64,
        asset_bought: &xdr::Asset,
        amount_bought: i64,
    ) -> Self {
        Self {
            source,
            asset_sold: asset_sold.into(),
            amount_sold,
            asset_bought: asset_bought.into(),
            amount_bought,
        }
    }
}

impl From<&xdr::ClaimAtom> for ClaimAtom {
    fn from(atom: &xdr::ClaimAtom) -> Self {
        match atom {
            xdr::ClaimAtom::V0(claim) => ClaimAtom::trade(
                ClaimSource::V0 {
                    seller: claim.seller_ed25519.0,
                    offer_id: claim.offer_id,
                },
                &claim.asset_sold,
                claim.amount_sold,
                &claim.asset_bought,
                claim.amount_bought,
            ),
            xdr::ClaimAtom::OrderBook(claim) => ClaimAtom::trade(
                ClaimSource::OrderBook {
                    seller: (&claim.seller_id).into(),
                    offer_id: claim.offer_id,
                },
                &claim.asset_sold,
                claim.amount_sold,
                &claim.asset_bought,
                claim.amount_bought,
            ),
            xdr::ClaimAtom::LiquidityPool(claim) => ClaimAtom::trade(
                ClaimSource::LiquidityPool {
                    pool_id: claim.liquidity_pool_id.0 .0,
                },
                &claim.asset_sold,
                claim.amount_sold,
                &claim.asset_bought,
                claim.amount_bought,
            ),
        }
    }
}

/// What happened to the submitted offer after matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferEffect {
    Created(OfferEntry),
    Updated(OfferEntry),
    Deleted,
}

impl OfferEffect {
    pub fn name(&self) -> &'static str {
        match self {
            OfferEffect::Created(_) => "MANAGE_OFFER_CREATED",
            OfferEffect::Updated(_) => "MANAGE_OFFER_UPDATED",
            OfferEffect::Deleted => "MANAGE_OFFER_DELETED",
        }
    }

    pub fn entry(&self) -> Option<&OfferEntry> {
        match self {
            OfferEffect::Created(entry) | OfferEffect::Updated(entry) => Some(entry),
            OfferEffect::Deleted => None,
        }
    }
}

/// Payload of a successful offer operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageOfferSuccess {
    pub offers_claimed: Vec<ClaimAtom>,
    pub offer: OfferEffect,
}

impl From<&xdr::ManageOfferSuccessResult> for ManageOfferSuccess {
    fn from(success: &xdr::ManageOfferSuccessResult) -> Self {
        let offer = match &success.offer {
            xdr::ManageOfferSuccessResultOffer::Created(entry) => OfferEffect::Created(entry.into()),
            xdr::ManageOfferSuccessResultOffer::Updated(entry) => OfferEffect::Updated(entry.into()),
            xdr::ManageOfferSuccessResultOffer::Deleted => OfferEffect::Deleted,
        };
        Self {
            offers_claimed: success.offers_claimed.iter().map(ClaimAtom::from).collect(),
            offer,
        }
    }
}

/// Final hop of a path payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplePaymentResult {
    pub destination: AccountId,
    pub asset: Asset,
    pub amount: i64,
}

impl From<&xdr::SimplePaymentResult> for SimplePaymentResult {
    fn from(payment: &xdr::SimplePaymentResult) -> Self {
        Self {
            destination: (&payment.destination).into(),
            asset: (&payment.asset).into(),
            amount: payment.amount,
        }
    }
}

/// Payload of a successful path payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPaymentSuccess {
    pub offers: Vec<ClaimAtom>,
    pub last: SimplePaymentResult,
}

impl PathPaymentSuccess {
    fn new(offers: &[xdr::ClaimAtom], last: &xdr::SimplePaymentResult) -> Self {
        Self {
            offers: offers.iter().map(ClaimAtom::from).collect(),
            last: last.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflationPayout {
    pub destination: AccountId,
    pub amount: i64,
}

impl From<&xdr::InflationPayout> for InflationPayout {
    fn from(payout: &xdr::InflationPayout) -> Self {
        Self {
            destination: (&payout.destination).into(),
            amount: payout.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::{Limits, ReadXdr};

    fn issuer() -> xdr::AccountId {
        xdr::AccountId(xdr::PublicKey::PublicKeyTypeEd25519(xdr::Uint256([1u8; 32])))
    }

    #[test]
    fn test_manage_data_result() {
        let raw = xdr::OperationResult::OpInner(xdr::OperationResultTr::ManageData(
            xdr::ManageDataResult::Success,
        ));
        let result = OperationResult::from(&raw);
        assert_eq!(result, OperationResult::manage_data(ManageDataResultCode::Success));
        assert!(result.is_success());
        assert_eq!(result.to_string(), "MANAGE_DATA: MANAGE_DATA_SUCCESS");
    }

    #[test]
    fn test_operation_level_failure_has_no_body() {
        let raw = xdr::OperationResult::from_xdr([0xFF, 0xFF, 0xFF, 0xFF], Limits::none()).unwrap();
        let result = OperationResult::from(&raw);
        assert_eq!(result, OperationResult::Failed(OperationResultCode::BadAuth));
        assert!(!result.is_success());
        assert_eq!(result.to_string(), "opBAD_AUTH");
    }

    #[test]
    fn test_failed_inner_codes_carry_no_payload() {
        let raw = xdr::OperationResult::OpInner(xdr::OperationResultTr::ManageData(
            xdr::ManageDataResult::LowReserve,
        ));
        let result = OperationResult::from(&raw);
        assert_eq!(result, OperationResult::manage_data(ManageDataResultCode::LowReserve));
        assert_eq!(result.to_string(), "MANAGE_DATA: MANAGE_DATA_LOW_RESERVE");
    }

    #[test]
    fn test_other_operation_codes_keep_their_value() {
        let raw = xdr::OperationResult::OpInner(xdr::OperationResultTr::Payment(
            xdr::PaymentResult::Underfunded,
        ));
        let OperationResult::Inner(inner) = OperationResult::from(&raw) else {
            panic!("expected an inner result");
        };
        assert_eq!(inner.operation, OperationType::Payment);
        assert_eq!(inner.code, -2);
        assert_eq!(inner.manage_data_code(), None);
        assert_eq!(inner.to_string(), "PAYMENT: code -2");
    }

    #[test]
    fn test_path_payment_no_issuer_carries_asset() {
        let raw = xdr::OperationResultTr::PathPaymentStrictSend(
            xdr::PathPaymentStrictSendResult::NoIssuer(xdr::Asset::CreditAlphanum4(
                xdr::AlphaNum4 {
                    asset_code: xdr::AssetCode4(*b"USD\0"),
                    issuer: issuer(),
                },
            )),
        );
        let inner = OperationInnerResult::from(&raw);
        assert_eq!(inner.operation, OperationType::PathPaymentStrictSend);
        assert_eq!(inner.code, -9);
        assert_eq!(
            inner.detail,
            OperationResultDetail::NoIssuer(Asset::CreditAlphanum4 {
                code: *b"USD\0",
                issuer: AccountId::from_bytes([1u8; 32]),
            })
        );
    }

    #[test]
    fn test_liquidity_pool_claim_atom() {
        let raw = xdr::ClaimAtom::LiquidityPool(xdr::ClaimLiquidityAtom {
            liquidity_pool_id: xdr::PoolId(xdr::Hash([9u8; 32])),
            asset_sold: xdr::Asset::Native,
            amount_sold: 10,
            asset_bought: xdr::Asset::Native,
            amount_bought: 20,
        });
        assert_eq!(
            ClaimAtom::from(&raw),
            ClaimAtom {
                source: ClaimSource::LiquidityPool { pool_id: [9u8; 32] },
                asset_sold: Asset::Native,
                amount_sold: 10,
                asset_bought: Asset::Native,
                amount_bought: 20,
            }
        );
    }

    #[test]
    fn test_claimable_balance_id_is_reported() {
        let raw = xdr::OperationResultTr::CreateClaimableBalance(
            xdr::CreateClaimableBalanceResult::Success(
                xdr::ClaimableBalanceId::ClaimableBalanceIdTypeV0(xdr::Hash([7u8; 32])),
            ),
        );
        let inner = OperationInnerResult::from(&raw);
        assert_eq!(inner.detail, OperationResultDetail::ClaimableBalance([7u8; 32]));
        assert!(inner.to_string().ends_with(&format!("(balance id {})", hex::encode([7u8; 32]))));
    }
}
