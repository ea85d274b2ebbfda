//! `onos.aaa.stats.kpis` payloads: a flat snapshot of the ONOS AAA app's
//! RADIUS and EAPOL state machine counters.

use crate::de::null_as_default;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OnosAaaKpi {
    // RADIUS
    #[serde(rename = "acceptResponsesRx", deserialize_with = "null_as_default")]
    pub rx_accept_responses: f64,
    #[serde(rename = "rejectResponsesRx", deserialize_with = "null_as_default")]
    pub rx_reject_responses: f64,
    #[serde(rename = "challengeResponsesRx", deserialize_with = "null_as_default")]
    pub rx_challenge_responses: f64,
    #[serde(rename = "accessRequestsTx", deserialize_with = "null_as_default")]
    pub tx_access_requests: f64,
    #[serde(rename = "invalidValidatorsRx", deserialize_with = "null_as_default")]
    pub rx_invalid_validators: f64,
    #[serde(rename = "unknownTypeRx", deserialize_with = "null_as_default")]
    pub rx_unknown_type: f64,
    #[serde(rename = "pendingRequests", deserialize_with = "null_as_default")]
    pub pending_requests: f64,
    #[serde(rename = "droppedResponsesRx", deserialize_with = "null_as_default")]
    pub rx_dropped_responses: f64,
    #[serde(rename = "malformedResponsesRx", deserialize_with = "null_as_default")]
    pub rx_malformed_responses: f64,
    #[serde(rename = "unknownServerRx", deserialize_with = "null_as_default")]
    pub rx_unknown_server: f64,
    #[serde(rename = "requestRttMillis", deserialize_with = "null_as_default")]
    pub request_rtt_millis: f64,
    #[serde(rename = "requestReTx", deserialize_with = "null_as_default")]
    pub request_re_tx: f64,

    // EAPOL
    #[serde(rename = "eapolLogoffRx", deserialize_with = "null_as_default")]
    pub rx_eapol_logoff: f64,
    #[serde(rename = "eapolResIdentityMsgTrans", deserialize_with = "null_as_default")]
    pub eapol_res_identity_msg_trans: f64,
    #[serde(rename = "eapolAuthSuccessTrans", deserialize_with = "null_as_default")]
    pub auth_success_trans: f64,
    #[serde(rename = "eapolAuthFailureTrans", deserialize_with = "null_as_default")]
    pub auth_failure_trans: f64,
    #[serde(rename = "eapolStartReqTrans", deserialize_with = "null_as_default")]
    pub start_req_trans: f64,
    #[serde(rename = "accessReqPktTx", deserialize_with = "null_as_default")]
    pub tx_access_req_pkt: f64,
    #[serde(rename = "accessChallPktRx", deserialize_with = "null_as_default")]
    pub rx_access_chall_pkt: f64,
    #[serde(rename = "eapPktTxauthChooseEap", deserialize_with = "null_as_default")]
    pub eap_pkt_tx_auth_eap: f64,
    #[serde(rename = "eapolTransRespNotNak", deserialize_with = "null_as_default")]
    pub trans_resp_not_nak: f64,
}
