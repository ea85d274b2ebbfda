//! ONOS AAA statistics translation.

use crate::metrics::OnosAaaMetrics;
use kpi_types::OnosAaaKpi;

pub fn export_onos_aaa(kpi: &OnosAaaKpi, metrics: &OnosAaaMetrics) {
    metrics.rx_accept_responses.set(kpi.rx_accept_responses);
    metrics.rx_reject_responses.set(kpi.rx_reject_responses);
    metrics.rx_challenge_responses.set(kpi.rx_challenge_responses);
    metrics.tx_access_requests.set(kpi.tx_access_requests);
    metrics.rx_invalid_validators.set(kpi.rx_invalid_validators);
    metrics.rx_unknown_type.set(kpi.rx_unknown_type);
    metrics.pending_requests.set(kpi.pending_requests);
    metrics.rx_dropped_responses.set(kpi.rx_dropped_responses);
    metrics.rx_malformed_responses.set(kpi.rx_malformed_responses);
    metrics.rx_unknown_server.set(kpi.rx_unknown_server);
    metrics.request_rtt_millis.set(kpi.request_rtt_millis);
    metrics.request_re_tx.set(kpi.request_re_tx);

    metrics.eapol_logoff_rx.set(kpi.rx_eapol_logoff);
    metrics
        .eapol_res_identity_msg_trans
        .set(kpi.eapol_res_identity_msg_trans);
    metrics.auth_success_trans.set(kpi.auth_success_trans);
    metrics.auth_failure_trans.set(kpi.auth_failure_trans);
    metrics.start_req_trans.set(kpi.start_req_trans);
    metrics.tx_access_req_pkt.set(kpi.tx_access_req_pkt);
    metrics.rx_access_chall_pkt.set(kpi.rx_access_chall_pkt);
    metrics.eap_pkt_tx_auth_eap.set(kpi.eap_pkt_tx_auth_eap);
    metrics.trans_resp_not_nak.set(kpi.trans_resp_not_nak);
}
