use chrono::{DateTime, FixedOffset, Utc};

/// Argentina has no daylight saving time, so a fixed offset is exact.
const BUENOS_AIRES_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Builds the fixed extraction prompt, anchored to `now` so the model can
/// pick the right due date on invoices with two expirations.
pub fn build_invoice_prompt(now: DateTime<Utc>) -> String {
    let offset = FixedOffset::west_opt(BUENOS_AIRES_UTC_OFFSET_SECS)
        .expect("UTC-3 is within the valid offset range");
    let local = now.with_timezone(&offset);
    let current_date = now.format("%Y-%m-%d");
    let current_local = local.format("%d/%m/%Y, %H:%M:%S");

    format!(
        r#"Eres un asistente especializado en extraer información de comprobantes de pago argentinos. Analiza el documento adjunto y extrae los datos solicitados.

FECHA Y HORA ACTUAL: {current_local} ({current_date})

PASO 1 - VALIDACIÓN:
Antes de extraer nada, decide si el documento es realmente un comprobante de pago (factura, recibo o ticket impreso, escaneado, fotografiado o en PDF).
Rechaza el documento si contiene cualquiera de estos elementos:
- Interfaces de sistema operativo (barras de menú, dock, ventanas)
- Herramientas de desarrollo (inspector, consola, devtools)
- Marcos de simuladores o emuladores de dispositivos
- Capturas de pantalla de aplicaciones o páginas web, o fotos de pantallas
- Nombres de aplicaciones como "Safari", "Chrome", "DevTools" o "Simulator"
Ante cualquier duda, rechaza. En ese caso responde:
{{"status": "ERROR", "motivo": "El documento no es un comprobante de pago válido. Parece ser una captura de pantalla o interfaz de software."}}

PASO 2 - EXTRACCIÓN (solo si el comprobante es válido), responde con status "OK" y estos campos:
- nombre: nombre de la persona que pagó
- entidad: entidad que emite el comprobante
- fecha: fecha de emisión en formato YYYY-MM-DD, o null si no figura
- tipoComprobante: "Factura" (facturas fiscales A, B o C), "Recibo" (servicios públicos como luz, gas o agua), "Ticket" (farmacia, supermercado, etc.) u "Otros"
- tipo_factura: "A", "B" o "C" según la normativa argentina; solo cuando tipoComprobante es "Factura", si no null
- nro_factura: número de factura o comprobante
- items: lista de {{"cantidad": number, "descripcion": string, "importe": number}}, aunque haya un único ítem
- importe: total a pagar, igual a la suma de los importes de items

REGLAS PARA RECIBOS DE SERVICIOS PÚBLICOS:
- No desgloses cargos fijos, subsidios ni impuestos.
- Usa un único ítem con cantidad 1, descripcion "Servicio [tipo]" (por ejemplo "Servicio eléctrico") e importe igual al TOTAL A PAGAR destacado.

REGLAS PARA FACTURAS, TICKETS Y OTROS:
- cantidad es la cantidad de ítems; para consumos usa siempre 1.
- Las unidades de medida (kWh, m³, litros) van en la descripción, entre paréntesis, nunca en cantidad ni en importe.
- importe es el valor monetario del ítem.

IMPORTANTE:
- Si el comprobante tiene doble vencimiento, elige el que corresponde según la fecha actual indicada arriba.
- Los importes son números puros, sin símbolos de moneda.
- Para campos que no existen usa null, nunca undefined.
- Devuelve ÚNICAMENTE el JSON, sin texto adicional, sin markdown y sin bloques de código.

FORMATO DE RESPUESTA:
{{
  "status": "OK" | "ERROR",
  "motivo": "string (solo si status es ERROR)",
  "nombre": "string",
  "entidad": "string",
  "fecha": "YYYY-MM-DD" | null,
  "tipoComprobante": "Factura" | "Recibo" | "Ticket" | "Otros",
  "tipo_factura": "A" | "B" | "C" | null,
  "nro_factura": "string",
  "items": [{{"cantidad": number, "descripcion": "string", "importe": number}}],
  "importe": number
}}"#
    )
}
