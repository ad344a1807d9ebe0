pub const REACTOR_ENG_HELPER: &'static str = "
                                General notes \n
All problems assume a single irreversible reaction A -> B under isothermal conditions. \n
Units must be consistent: with F_A0 in mol/min and -rA in mol/(L*min) volumes come out in L, \n
with k in 1/min times come out in min. \n

                                1. Batch reactor \n
First-order reaction, constant volume, well mixed: \n
        t = -ln(1 - X) / k \n
Inputs: k, rate constant, 1/min; X, target conversion, 0 < X < 1. \n

                                2. CSTR \n
First-order reaction at steady state, ideal mixing (outlet = contents): \n
        V = F_A0 X / (k C_A0 (1 - X)),   C_A0 = F_A0 / v0 \n
Inputs: F_A0, mol/min; X; v0, inlet volumetric flow, L/min; k, 1/min. \n

                                3. CSTR + PFR in series (Levenspiel plot) \n
The rate is known only as a table of -rA against X. The CSTR brings conversion from 0 to X_int, \n
the PFR from X_int to X_final: \n
        V_CSTR = F_A0 X_int / (-rA(X_int)) \n
        V_PFR  = F_A0 * integral of dX / (-rA) from X_int to X_final \n
-rA(X_int) is interpolated linearly between table points; outside the table the nearest tabulated \n
rate is used. The PFR integral is evaluated by the trapezoidal rule over the table points lying \n
inside [X_int, X_final]; at least two points must fall in that range. \n
Rate data are entered as two comma-separated lines: first the X values, then the -rA values, e.g. \n
        0.0,0.1,0.2,0.3,0.4,0.5,0.6,0.7,0.8,0.85 \n
        0.0053,0.0052,0.005,0.0045,0.004,0.0033,0.0025,0.0018,0.00125,0.001 \n
On the Levenspiel plot (1/(-rA) against X) the CSTR volume per unit feed is the rectangle \n
X_int * 1/(-rA(X_int)), the PFR volume per unit feed is the area under the curve. \n

                                Task files \n
Several problems can be read from a text file: a section header (BATCH, CSTR, LEVENSPIEL) \n
followed by key: value lines. Use 'Generate task file template' to get an annotated example. \n
Missing keys take their values from reactor_settings.json (or the built-in course defaults). \n
";
