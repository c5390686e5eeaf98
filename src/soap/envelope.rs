use quick_xml::escape::escape;

pub const SOAP_NAMESPACE: &str = "urn:ICUTech.Intf-IICUTech";
pub const SOAP_ACTION: &str = "urn:ICUTech.Intf-IICUTech#Login";
pub const CONTENT_TYPE: &str = "text/xml;charset=UTF-8";

/// Builds the `Login(UserName, Password, IPs)` request body.
///
/// With `escape_values` unset the values are spliced in as given: a `<` or `&` in a
/// password produces a document the service cannot parse.
pub fn build(username: &str, password: &str, ip: &str, escape_values: bool) -> String {
    let field = |v: &str| -> String {
        if escape_values {
            escape(v).into_owned()
        } else {
            v.to_owned()
        }
    };
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<SOAP-ENV:Envelope \n",
            "    xmlns:SOAP-ENV=\"http://schemas.xmlsoap.org/soap/envelope/\" \n",
            "    xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \n",
            "    xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n",
            "    <SOAP-ENV:Body>\n",
            "        <NS1:Login xmlns:NS1=\"{ns}\">\n",
            "            <UserName xsi:type=\"xsd:string\">{username}</UserName>\n",
            "            <Password xsi:type=\"xsd:string\">{password}</Password>\n",
            "            <IPs xsi:type=\"xsd:string\">{ip}</IPs>\n",
            "        </NS1:Login>\n",
            "    </SOAP-ENV:Body>\n",
            "</SOAP-ENV:Envelope>",
        ),
        ns = SOAP_NAMESPACE,
        username = field(username),
        password = field(password),
        ip = field(ip),
    )
}
