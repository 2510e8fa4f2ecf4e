//! Result codes reported by the ledger.

use std::fmt;

/// Defines an `i32`-backed code enum with its protocol names.
macro_rules! result_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $value:literal => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn from_i32(value: i32) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_i32(&self) -> i32 {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Protocol name of the code.
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

result_code! {
    /// Outcome of a whole transaction.
    TransactionResultCode {
        FeeBumpInnerSuccess = 1 => "txFEE_BUMP_INNER_SUCCESS",
        Success = 0 => "txSUCCESS",
        Failed = -1 => "txFAILED",
        TooEarly = -2 => "txTOO_EARLY",
        TooLate = -3 => "txTOO_LATE",
        MissingOperation = -4 => "txMISSING_OPERATION",
        BadSeq = -5 => "txBAD_SEQ",
        BadAuth = -6 => "txBAD_AUTH",
        InsufficientBalance = -7 => "txINSUFFICIENT_BALANCE",
        NoAccount = -8 => "txNO_ACCOUNT",
        InsufficientFee = -9 => "txINSUFFICIENT_FEE",
        BadAuthExtra = -10 => "txBAD_AUTH_EXTRA",
        InternalError = -11 => "txINTERNAL_ERROR",
        NotSupported = -12 => "txNOT_SUPPORTED",
        FeeBumpInnerFailed = -13 => "txFEE_BUMP_INNER_FAILED",
        BadSponsorship = -14 => "txBAD_SPONSORSHIP",
        BadMinSeqAgeOrGap = -15 => "txBAD_MIN_SEQ_AGE_OR_GAP",
        Malformed = -16 => "txMALFORMED",
        SorobanInvalid = -17 => "txSOROBAN_INVALID",
    }
}

impl TransactionResultCode {
    /// Whether the transaction was applied, directly or as a fee-bump inner transaction.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            TransactionResultCode::Success | TransactionResultCode::FeeBumpInnerSuccess
        )
    }
}

result_code! {
    /// Operation-level outcome; anything but `opINNER` means the operation never ran.
    OperationResultCode {
        Inner = 0 => "opINNER",
        BadAuth = -1 => "opBAD_AUTH",
        NoAccount = -2 => "opNO_ACCOUNT",
        NotSupported = -3 => "opNOT_SUPPORTED",
        TooManySubentries = -4 => "opTOO_MANY_SUBENTRIES",
        ExceededWorkLimit = -5 => "opEXCEEDED_WORK_LIMIT",
        TooManySponsoring = -6 => "opTOO_MANY_SPONSORING",
    }
}

result_code! {
    /// Outcome of a `ManageData` operation.
    ManageDataResultCode {
        Success = 0 => "MANAGE_DATA_SUCCESS",
        NotSupportedYet = -1 => "MANAGE_DATA_NOT_SUPPORTED_YET",
        NameNotFound = -2 => "MANAGE_DATA_NAME_NOT_FOUND",
        LowReserve = -3 => "MANAGE_DATA_LOW_RESERVE",
        InvalidName = -4 => "MANAGE_DATA_INVALID_NAME",
    }
}
